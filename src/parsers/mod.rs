//! # 解析器模块
//!
//! 这个模块包含输入侧的解析功能：
//!
//! - HTML 片段解析和基础 DOM 访问
//! - 内联样式字符串解析与清洗
//!
//! # 模块组织
//!
//! - `html` - HTML 片段解析、DOM 节点访问
//! - `css` - 内联样式声明解析、危险模式过滤、属性名驼峰化

pub mod css;
pub mod html;

// Re-export commonly used items for convenience
pub use css::{sanitize_style, StyleDeclaration};
pub use html::{fragment_root, fragment_to_dom, get_node_attr, get_node_name};

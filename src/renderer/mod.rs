//! # 渲染树转换模块
//!
//! 这个模块把过滤后的 DOM 转换为可直接交给组件树渲染框架的元素树：
//!
//! - `node` - 输出树的节点类型
//! - `attributes` - 属性映射（重命名 / 过滤 / 结构化样式替换）
//! - `rel` - 新窗口链接的 rel 语义强制
//! - `tables` - 表格骨架空白文本判定
//! - `walker` - 递归树遍历，组合以上各部分

pub mod attributes;
pub mod node;
pub mod rel;
pub mod tables;
pub mod walker;

// Re-export commonly used items for convenience
pub use attributes::{map_attribute, AttributeDecision};
pub use node::{RenderAttribute, RenderElement, RenderNode};
pub use rel::enforce_anchor_rel;
pub use tables::{is_insignificant_whitespace, is_table_structural_tag};
pub use walker::render_children;

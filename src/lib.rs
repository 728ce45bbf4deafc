//! # Marksafe Library
//!
//! 将 markdown 渲染产生的不可信 HTML 片段转换为安全、可直接渲染的元素树。
//! 转换分为两道独立的防线：先做标签/属性白名单过滤，再做值级别的语义安全
//! 决策（URL 协议策略、内联样式清洗、属性映射、rel 强制、表格空白归一化）。
//!
//! ## 模块组织
//!
//! - `core` - 核心配置、错误类型和流水线入口
//! - `parsers` - HTML 片段解析与内联样式解析
//! - `sanitizer` - 第一道白名单过滤
//! - `renderer` - 渲染树转换（属性映射、rel 强制、表格归一化、树遍历）
//! - `utils` - URL 安全策略等工具函数
//! - `builders` - 输出编码构建器（HTML 字符串 / JSON）

pub mod builders;
pub mod core;
pub mod env;
pub mod parsers;
pub mod renderer;
pub mod sanitizer;
pub mod utils;

// Re-export commonly used items for convenience
pub use crate::core::{render_fragment, MarksafeError, MarksafeOptions, DEFAULT_MAX_DEPTH};
pub use parsers::css::{sanitize_style, StyleDeclaration};
pub use renderer::{AttributeDecision, RenderAttribute, RenderElement, RenderNode};
pub use utils::url::{evaluate_url, UrlRole, UrlVerdict};

//! # 工具模块
//!
//! 这个模块包含各种工具函数和实用程序：
//!
//! - URL 角色分类与安全策略判定
//!
//! # 模块组织
//!
//! - `url` - URL 安全策略（协议白名单、相对引用识别）

pub mod url;

// Re-export commonly used items for convenience
pub use url::{evaluate_url, UrlRole, UrlVerdict};

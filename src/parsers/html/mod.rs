//! HTML 解析模块
//!
//! - `dom`: 片段解析和基础 DOM 访问

pub mod dom;

// 重新导出主要的公共 API
pub use dom::{fragment_root, fragment_to_dom, get_node_attr, get_node_name};

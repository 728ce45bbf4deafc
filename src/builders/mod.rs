//! # 输出构建器模块
//!
//! 渲染树本身就是输出边界；这个模块提供两种具体编码：
//!
//! - `html_builder` - 手工拼装 HTML 字符串（含转义与空元素处理）
//! - JSON 编码直接走 serde

pub mod html_builder;

pub use html_builder::{render_to_json, render_to_string};

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::builders::{render_to_json, render_to_string};
use crate::parsers::html::{fragment_root, fragment_to_dom};
use crate::renderer::node::{RenderAttribute, RenderElement, RenderNode};
use crate::renderer::walker::render_children;
use crate::sanitizer::sanitize_dom;

/// 递归深度上限的默认值
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Represents errors that can occur around the rendering pipeline
///
/// The tree conversion itself never fails: malformed or unsafe input units
/// degrade by omission. This error type only covers the fallible edges
/// (reading input in the CLI, encoding the output tree).
#[derive(Debug, Error)]
pub enum MarksafeError {
    /// Failed to read input data
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to encode the render tree as JSON
    #[error("failed to encode render tree as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration options for fragment rendering
///
/// This struct contains all the configuration options that control
/// how an HTML fragment is filtered and converted into a render tree.
#[derive(Clone, Debug)]
pub struct MarksafeOptions {
    /// 包装容器的标签名
    pub container_tag: String,
    /// 包装容器的 class 值，`None` 表示不加 class
    pub container_class: Option<String>,
    /// 递归深度上限
    pub max_depth: usize,
    /// 跳过第一道白名单过滤（输入已经由上游白名单过滤时使用）
    pub assume_sanitized: bool,
}

impl Default for MarksafeOptions {
    fn default() -> MarksafeOptions {
        MarksafeOptions {
            container_tag: "div".to_string(),
            container_class: Some("markdown-content".to_string()),
            max_depth: DEFAULT_MAX_DEPTH,
            assume_sanitized: false,
        }
    }
}

impl fmt::Display for MarksafeOptions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "container=<{} class={:?}> max_depth={} assume_sanitized={}",
            self.container_tag, self.container_class, self.max_depth, self.assume_sanitized
        )
    }
}

/// 把 HTML 片段转换为安全的渲染树
///
/// 这是库的主入口。输入是一个 UTF-8 的 HTML 片段字符串，输出是包在
/// 容器元素里的渲染树。整个转换是输入的纯函数：没有 I/O、没有共享
/// 可变状态，相同输入永远产出相同输出，可以被多个线程同时调用。
///
/// 空输入渲染为空的容器节点，永远不是错误。
///
/// # 参数
///
/// * `html` - HTML 片段字符串
/// * `options` - 渲染配置
///
/// # 示例
///
/// ```
/// use marksafe::core::{render_fragment, MarksafeOptions};
///
/// let options = MarksafeOptions::default();
/// let tree = render_fragment("<p>Hello <strong>world</strong></p>", &options);
/// assert_eq!(tree.text_content(), "Hello world");
/// ```
pub fn render_fragment(html: &str, options: &MarksafeOptions) -> RenderNode {
    let dom = fragment_to_dom(html);

    let mut container = RenderElement::new(&options.container_tag);
    if let Some(class) = &options.container_class {
        container.attributes.push(RenderAttribute {
            name: "className".to_string(),
            value: class.clone(),
        });
    }

    if let Some(root) = fragment_root(&dom) {
        if !options.assume_sanitized {
            sanitize_dom(&root, options.max_depth);
        }
        container.children = render_children(&root, &options.container_tag, 0, options.max_depth);
    } else {
        debug!("fragment parse yielded no content root, rendering empty container");
    }

    RenderNode::Element(container)
}

/// 把 HTML 片段渲染为 HTML 字符串
///
/// `render_fragment` 与 HTML 构建器的组合。输出重新经过流水线时会
/// 得到完全相同的决策（所有拒绝都已经生效）。
pub fn render_fragment_to_html(html: &str, options: &MarksafeOptions) -> String {
    render_to_string(&render_fragment(html, options))
}

/// 把 HTML 片段渲染为 JSON 编码的渲染树
pub fn render_fragment_to_json(
    html: &str,
    options: &MarksafeOptions,
) -> Result<String, MarksafeError> {
    render_to_json(&render_fragment(html, options))
}

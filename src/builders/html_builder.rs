//! HTML / JSON 输出构建器
//!
//! 负责把渲染树编码为 HTML 字符串或 JSON。HTML 输出写回标准形式：
//! class 属性使用 `class`（而不是框架内部的 `className`），样式属性名
//! 还原为连字符形式，因此构建器的输出重新进入流水线时会复现完全
//! 相同的渲染树。

use crate::core::MarksafeError;
use crate::parsers::css::hyphenate_property;
use crate::renderer::node::{RenderElement, RenderNode};

/// 没有闭合标签的空元素
const VOID_ELEMENTS: &[&str] = &["br", "col", "hr", "img"];

/// 把渲染树编码为 HTML 字符串
pub fn render_to_string(node: &RenderNode) -> String {
    let mut html = String::new();
    write_node(&mut html, node);
    html
}

/// 把渲染树编码为 JSON
pub fn render_to_json(node: &RenderNode) -> Result<String, MarksafeError> {
    Ok(serde_json::to_string_pretty(node)?)
}

fn write_node(html: &mut String, node: &RenderNode) {
    match node {
        RenderNode::Text { content } => html.push_str(&escape_text(content)),
        RenderNode::Element(element) => write_element(html, element),
    }
}

fn write_element(html: &mut String, element: &RenderElement) {
    html.push('<');
    html.push_str(&element.tag);

    for attr in &element.attributes {
        html.push(' ');
        // className 是框架内部的名字，HTML 输出写回标准的 class
        if attr.name == "className" {
            html.push_str("class");
        } else {
            html.push_str(&attr.name);
        }
        html.push_str("=\"");
        html.push_str(&escape_attr(&attr.value));
        html.push('"');
    }

    if !element.style.is_empty() {
        html.push_str(" style=\"");
        for (i, declaration) in element.style.iter().enumerate() {
            if i > 0 {
                html.push_str("; ");
            }
            html.push_str(&hyphenate_property(&declaration.property));
            html.push_str(": ");
            html.push_str(&escape_attr(&declaration.value));
        }
        html.push('"');
    }

    html.push('>');

    if VOID_ELEMENTS.contains(&element.tag.as_str()) {
        return;
    }

    for child in &element.children {
        write_node(html, child);
    }

    html.push_str("</");
    html.push_str(&element.tag);
    html.push('>');
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

//! 第一道白名单过滤模块
//!
//! 本模块是两道防线中的第一道：粗粒度的标签/属性准入过滤。它回答的
//! 是"这个标签、这个属性允不允许存在"，而第二道（`renderer` 与
//! `utils::url`、`parsers::css`）回答的是"这个值安不安全"。两道防线
//! 刻意分开实现、分开测试，失败模式互不相同。
//!
//! # 主要功能
//!
//! - **标签白名单**: markdown 渲染结果会用到的标签集合，未列入的标签
//!   被拆开，子内容保留
//! - **整体移除**: `script`、`iframe` 等标签连同其内容一起删除
//! - **属性白名单**: 全局属性、`data-*` / `aria-*` 前缀和按标签的专有属性
//! - **事件处理器剥离**: 所有 `on*` 属性一律删除
//! - **注释移除**: 注释节点不进入渲染树
//!
//! 本模块绝不改写属性值字符串：值级别的判定属于第二道防线，它假设
//! 看到的值与作者写下的完全一致。
//!
//! 过滤直接在解析出的 DOM 上原地进行，随后的树渲染是纯函数。

use std::rc::Rc;

use markup5ever_rcdom::{Handle, NodeData};
use tracing::{debug, warn};

/// markdown 渲染结果允许出现的标签
pub const ALLOWED_TAGS: &[&str] = &[
    "a",
    "abbr",
    "b",
    "blockquote",
    "br",
    "caption",
    "code",
    "col",
    "colgroup",
    "dd",
    "del",
    "details",
    "div",
    "dl",
    "dt",
    "em",
    "figcaption",
    "figure",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "hr",
    "i",
    "img",
    "ins",
    "kbd",
    "li",
    "mark",
    "ol",
    "p",
    "path",
    "pre",
    "s",
    "section",
    "small",
    "span",
    "strong",
    "sub",
    "summary",
    "sup",
    "svg",
    "table",
    "tbody",
    "td",
    "tfoot",
    "th",
    "thead",
    "tr",
    "u",
    "ul",
];

/// 连同内容一起删除的标签
///
/// 这些标签的文本内容本身就是代码或不可见数据，拆开保留子内容反而会
/// 把脚本源码变成页面文本。
const NON_TEXT_TAGS: &[&str] = &[
    "embed", "iframe", "noscript", "object", "option", "script", "style", "textarea", "title",
];

/// 任何标签上都允许的属性
const GLOBAL_ATTRS: &[&str] = &["class", "dir", "id", "lang", "style", "title"];

/// 按前缀放行的属性族
const ALLOWED_ATTR_PREFIXES: &[&str] = &["aria-", "data-"];

/// 标签专有的属性白名单
fn tag_allowed_attrs(tag: &str) -> &'static [&'static str] {
    match tag {
        "a" => &["href", "name", "rel", "target"],
        "img" => &["alt", "height", "loading", "src", "width"],
        "td" | "th" => &["align", "colspan", "rowspan", "scope"],
        "col" | "colgroup" => &["span"],
        "ol" => &["reversed", "start", "type"],
        "details" => &["open"],
        "blockquote" | "del" | "ins" => &["cite"],
        "svg" => &[
            "fill",
            "height",
            "role",
            "stroke",
            "stroke-width",
            "viewBox",
            "width",
            "xmlns",
        ],
        "path" => &[
            "d",
            "fill",
            "fill-rule",
            "stroke",
            "stroke-linecap",
            "stroke-linejoin",
            "stroke-width",
        ],
        _ => &[],
    }
}

/// 检查属性名是否为 DOM 事件处理器
///
/// HTML 里不存在以 `on` 开头的合法非事件属性，按前缀匹配即可覆盖
/// 全部事件处理器，且对未来新增的事件同样封闭。
pub fn attr_is_event_handler(attr_name: &str) -> bool {
    let bytes = attr_name.as_bytes();
    bytes.len() > 2 && bytes[..2].eq_ignore_ascii_case(b"on")
}

/// 判定一个属性能否通过第一道过滤
pub fn attr_is_allowed(tag: &str, attr_name: &str) -> bool {
    if attr_is_event_handler(attr_name) {
        return false;
    }

    if GLOBAL_ATTRS.contains(&attr_name) {
        return true;
    }

    if ALLOWED_ATTR_PREFIXES
        .iter()
        .any(|prefix| attr_name.starts_with(prefix))
    {
        return true;
    }

    tag_allowed_attrs(tag)
        .iter()
        .any(|allowed| attr_name.eq_ignore_ascii_case(allowed))
}

/// 对整棵子树做第一道白名单过滤（原地修改）
///
/// # 参数
///
/// * `root` - 过滤起点，通常是片段解析的内容根节点
/// * `max_depth` - 递归深度上限，超过后更深的内容被整体丢弃
pub fn sanitize_dom(root: &Handle, max_depth: usize) {
    sanitize_children(root, 0, max_depth);
}

fn sanitize_children(node: &Handle, depth: usize, max_depth: usize) {
    if depth >= max_depth {
        warn!(depth, "nesting depth ceiling reached, dropping deeper content");
        node.children.borrow_mut().clear();
        return;
    }

    let original_children: Vec<Handle> = node.children.borrow().clone();
    let mut kept_children: Vec<Handle> = Vec::with_capacity(original_children.len());

    for child in original_children {
        match child.data {
            NodeData::Element { ref name, ref attrs, .. } => {
                let tag: &str = name.local.as_ref();

                if NON_TEXT_TAGS.contains(&tag) {
                    debug!(tag, "removing disallowed element and its content");
                    continue;
                }

                if !ALLOWED_TAGS.contains(&tag) {
                    // 标签不在白名单时丢弃标签本身，保留其子内容
                    debug!(tag, "unwrapping disallowed element");
                    sanitize_children(&child, depth + 1, max_depth);
                    for grandchild in child.children.borrow().iter() {
                        grandchild.parent.set(Some(Rc::downgrade(node)));
                        kept_children.push(grandchild.clone());
                    }
                    continue;
                }

                attrs
                    .borrow_mut()
                    .retain(|attr| attr_is_allowed(tag, attr.name.local.as_ref()));
                sanitize_children(&child, depth + 1, max_depth);
                kept_children.push(child.clone());
            }
            NodeData::Text { .. } => {
                kept_children.push(child.clone());
            }
            // 注释、doctype 等节点一律移除
            _ => {}
        }
    }

    *node.children.borrow_mut() = kept_children;
}

//! 新窗口链接的 rel 语义强制
//!
//! `target="_blank"` 加上缺失的 `rel="noopener noreferrer"` 会让被打开
//! 的页面通过 `window.opener` 反向操纵原页面（reverse tabnabbing）。
//! 标签/属性白名单看不到 `target` 与 `rel` 的组合关系，只有语义层
//! 能补上这个缺口。

use crate::renderer::node::RenderElement;

/// `target="_blank"` 时必须出现的 rel 标记
const BLANK_TARGET_REL_TOKENS: &[&str] = &["noopener", "noreferrer"];

/// 保证新窗口锚点的 rel 语义安全
///
/// 节点的 `target` 属性等于 `_blank` 时，把 `noopener` 和 `noreferrer`
/// 合并进 `rel` 的标记集合：已有的其他标记保持原序，缺失的标记追加
/// 到末尾。`target` 不是 `_blank` 时绝不凭空合成 `rel` 属性。
pub fn enforce_anchor_rel(element: &mut RenderElement) {
    if element.attr("target") != Some("_blank") {
        return;
    }

    let mut rel_tokens: Vec<String> = element
        .attr("rel")
        .map(|rel| rel.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();

    for required in BLANK_TARGET_REL_TOKENS {
        if !rel_tokens
            .iter()
            .any(|token| token.eq_ignore_ascii_case(required))
        {
            rel_tokens.push(required.to_string());
        }
    }

    element.set_attr("rel", &rel_tokens.join(" "));
}

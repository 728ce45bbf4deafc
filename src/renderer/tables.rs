//! 表格骨架空白文本判定
//!
//! markdown 转 HTML 时常在表格骨架标签之间留下缩进空白，组件树渲染
//! 框架会把这些文本子节点当作非法内容报错或渲染错乱。骨架标签的
//! 直接空白文本子节点没有任何语义，移除即可；行内元素之间的空白
//! （比如 `<strong>` 和 `<em>` 之间的分词空格）必须原样保留。

/// 表格骨架标签
pub const TABLE_STRUCTURAL_TAGS: &[&str] = &["colgroup", "table", "tbody", "tfoot", "thead", "tr"];

/// 检查是否为表格骨架标签
pub fn is_table_structural_tag(tag: &str) -> bool {
    TABLE_STRUCTURAL_TAGS.contains(&tag)
}

/// 判定一个文本节点是否为骨架标签下可丢弃的空白
pub fn is_insignificant_whitespace(parent_tag: &str, text: &str) -> bool {
    is_table_structural_tag(parent_tag) && text.chars().all(char::is_whitespace)
}

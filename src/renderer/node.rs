//! 输出树节点类型
//!
//! 渲染树是整个流水线唯一跨出边界的实体：标签名、已经做完决策的属性
//! 序列、结构化的样式声明和有序的子节点。节点可序列化（serde），
//! 可比较（用于确定性测试）。

use serde::Serialize;

use crate::parsers::css::StyleDeclaration;

/// 渲染树节点
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderNode {
    /// 元素节点
    Element(RenderElement),
    /// 文本节点，内容原样保留
    Text { content: String },
}

/// 渲染树元素
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderElement {
    /// 标签名
    pub tag: String,
    /// 已决策的属性，保持源顺序
    pub attributes: Vec<RenderAttribute>,
    /// 结构化样式声明；为空表示没有 style 属性
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub style: Vec<StyleDeclaration>,
    /// 子节点，保持源顺序
    pub children: Vec<RenderNode>,
}

/// 单个已决策的属性
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderAttribute {
    pub name: String,
    pub value: String,
}

impl RenderElement {
    /// 创建一个无属性、无子节点的元素
    pub fn new(tag: &str) -> RenderElement {
        RenderElement {
            tag: tag.to_string(),
            attributes: Vec::new(),
            style: Vec::new(),
            children: Vec::new(),
        }
    }

    /// 按名称读取属性值
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// 收集元素子树的全部文本内容
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .map(|child| child.text_content())
            .collect()
    }

    /// 设置属性值，已存在时原位覆盖，否则追加到末尾
    pub fn set_attr(&mut self, name: &str, value: &str) {
        for attr in self.attributes.iter_mut() {
            if attr.name == name {
                attr.value = value.to_string();
                return;
            }
        }
        self.attributes.push(RenderAttribute {
            name: name.to_string(),
            value: value.to_string(),
        });
    }
}

impl RenderNode {
    /// 收集子树的全部文本内容
    pub fn text_content(&self) -> String {
        match self {
            RenderNode::Text { content } => content.clone(),
            RenderNode::Element(element) => element
                .children
                .iter()
                .map(|child| child.text_content())
                .collect(),
        }
    }
}

//! DOM 遍历与渲染树生成
//!
//! 这个模块是整条流水线的组合根：递归遍历过滤后的 DOM，对每个节点
//! 调用属性映射（内部再调 URL 策略和样式清洗）、锚点 rel 强制和
//! 表格空白判定，产出渲染树。
//!
//! # 设计约束
//!
//! - **纯函数**: 只读输入 DOM，输出全新分配的渲染树；相同输入必然
//!   产出相同输出，调用方可以安全地按输入做缓存
//! - **永不失败**: 不安全的单元（URL、样式声明、属性）以省略的方式
//!   退化，绝不中断整棵树的转换
//! - **深度上限**: 输入来自不可信内容，病态嵌套在达到上限后被整体
//!   丢弃，而不是耗尽调用栈

use markup5ever_rcdom::{Handle, NodeData};
use tracing::warn;

use crate::renderer::attributes::{map_attribute, AttributeDecision};
use crate::renderer::node::{RenderAttribute, RenderElement, RenderNode};
use crate::renderer::rel::enforce_anchor_rel;
use crate::renderer::tables::is_insignificant_whitespace;

/// 渲染一个 DOM 节点的全部子节点
///
/// # 参数
///
/// * `parent` - DOM 父节点
/// * `parent_tag` - 父节点标签名，用于表格骨架空白判定
/// * `depth` - 当前递归深度
/// * `max_depth` - 深度上限，达到后返回空序列
pub fn render_children(
    parent: &Handle,
    parent_tag: &str,
    depth: usize,
    max_depth: usize,
) -> Vec<RenderNode> {
    if depth >= max_depth {
        warn!(depth, "nesting depth ceiling reached, omitting deeper content");
        return Vec::new();
    }

    let mut rendered: Vec<RenderNode> = Vec::new();

    for child in parent.children.borrow().iter() {
        match child.data {
            NodeData::Text { ref contents } => {
                let text = contents.borrow().to_string();
                // 表格骨架标签的直接空白文本子节点没有语义，丢弃
                if is_insignificant_whitespace(parent_tag, &text) {
                    continue;
                }
                rendered.push(RenderNode::Text { content: text });
            }
            NodeData::Element {
                ref name,
                ref attrs,
                ..
            } => {
                let tag: &str = name.local.as_ref();
                let mut element = RenderElement::new(tag);

                for attr in attrs.borrow().iter() {
                    match map_attribute(tag, attr.name.local.as_ref(), &attr.value) {
                        AttributeDecision::Keep(value) => {
                            element.attributes.push(RenderAttribute {
                                name: attr.name.local.to_string(),
                                value,
                            });
                        }
                        AttributeDecision::KeepRenamed(new_name, value) => {
                            element.attributes.push(RenderAttribute {
                                name: new_name,
                                value,
                            });
                        }
                        AttributeDecision::ReplaceStyle(declarations) => {
                            element.style = declarations;
                        }
                        AttributeDecision::Drop => {}
                    }
                }

                if tag == "a" {
                    enforce_anchor_rel(&mut element);
                }

                element.children = render_children(child, tag, depth + 1, max_depth);
                rendered.push(RenderNode::Element(element));
            }
            // 注释等其他节点类型不进入渲染树
            _ => {}
        }
    }

    rendered
}

//! 属性映射模块
//!
//! 对每个 (标签, 属性名, 原始值) 做一次独立决策：原样保留、重命名保留、
//! 替换为结构化样式、或者丢弃。同一个属性名在不同上下文下可能有不同
//! 策略（`href` 与 `src` 的协议白名单不同），这正是第一道白名单过滤
//! 表达不了、必须放在这一层的原因。
//!
//! 已经是连字符形式、目标框架又按连字符原样渲染的属性族
//! （SVG 表现属性如 `stroke-width`、`stroke-linecap`，以及 `data-*` /
//! `aria-*`）没有任何重命名步骤，直接走兜底的原样传递分支，
//! 因此不可能被意外改名或丢弃。

use tracing::debug;

use crate::parsers::css::{sanitize_style, StyleDeclaration};
use crate::utils::url::{evaluate_url, UrlRole, UrlVerdict};

/// 目标框架的 class 属性名
const FRAMEWORK_CLASS_ATTR: &str = "className";

/// 单个属性的映射决策
///
/// 每个变体都必须被调用点显式处理，不存在"默认保留"或"默认丢弃"的
/// 隐式路径。
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeDecision {
    /// 按原名原值保留
    Keep(String),
    /// 重命名后保留：(新属性名, 原值)
    KeepRenamed(String, String),
    /// 替换为结构化样式声明序列
    ReplaceStyle(Vec<StyleDeclaration>),
    /// 丢弃整个属性
    Drop,
}

/// 对单个属性做映射决策
///
/// # 参数
///
/// * `tag` - 属性所在元素的标签名
/// * `attr_name` - 属性名
/// * `attr_value` - 属性值原文
///
/// # 决策规则
///
/// - `class` → 重命名为目标框架的 class 属性名，值原样传递
/// - `style` → 经内联样式清洗后替换为结构化声明；零条存活则丢弃属性
/// - `href` / `src` → 交给 URL 安全策略；被拒绝时丢弃属性，绝不改写
/// - 其余属性（`id`、`name`、`title`、`target`、`data-*`、`aria-*`、
///   SVG 表现属性等）原名原值传递
pub fn map_attribute(tag: &str, attr_name: &str, attr_value: &str) -> AttributeDecision {
    if attr_name == "class" {
        return AttributeDecision::KeepRenamed(
            FRAMEWORK_CLASS_ATTR.to_string(),
            attr_value.to_string(),
        );
    }

    if attr_name == "style" {
        let declarations = sanitize_style(attr_value);
        if declarations.is_empty() {
            // 零条声明时省略属性，不输出空的 style
            return AttributeDecision::Drop;
        }
        return AttributeDecision::ReplaceStyle(declarations);
    }

    if let Some(role) = UrlRole::from_attr_name(attr_name) {
        return match evaluate_url(role, attr_value) {
            UrlVerdict::Allowed(value) => AttributeDecision::Keep(value),
            UrlVerdict::Rejected => {
                debug!(tag, attr = attr_name, "dropping attribute with rejected URL");
                AttributeDecision::Drop
            }
        };
    }

    AttributeDecision::Keep(attr_value.to_string())
}

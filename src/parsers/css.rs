//! 内联样式解析器模块
//!
//! 此模块把元素的 `style` 属性字符串解析为结构化的样式声明序列，
//! 并在解析过程中剔除危险模式。这里刻意不做完整的 CSS 语法解析：
//! 输入来自 markdown 渲染结果，声明级别的拆分已经足够，而且值必须
//! 原样保留（重新序列化 token 会改写作者写下的内容）。
//!
//! # 主要功能
//!
//! - **声明拆分**: 按 `;` 拆分声明，按第一个 `:` 拆分属性名和值
//! - **畸形声明丢弃**: 没有冒号、属性名为空、值为空的片段直接丢弃
//! - **危险模式过滤**: 值中出现 `expression(` 或 `javascript:` 的声明被剔除
//!   （IE 的 `expression()` 与 `url(javascript:...)` 是历史遗留的 CSS 注入途径）
//! - **属性名驼峰化**: `border-radius` → `borderRadius`，适配组件树渲染框架
//!
//! # 使用示例
//!
//! ```rust
//! use marksafe::parsers::css::sanitize_style;
//!
//! let declarations = sanitize_style("max-width: 100%; border-radius: 4px");
//! assert_eq!(declarations[0].property, "maxWidth");
//! assert_eq!(declarations[1].value, "4px");
//! ```

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// 单条内联样式声明
///
/// `property` 已经转换为目标框架期望的驼峰形式；`value` 保持作者原文
/// （仅去除首尾空白）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleDeclaration {
    /// 驼峰形式的样式属性名
    pub property: String,
    /// 样式值原文
    pub value: String,
}

/// 危险样式值模式
///
/// 匹配不区分大小写的 `expression(` 和 `javascript:` 子串。
fn dangerous_style_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)expression\(|javascript:").unwrap())
}

/// 将 `style` 属性字符串清洗为样式声明序列
///
/// # 参数
///
/// * `style_attr_value` - `style` 属性的原始字符串值
///
/// # 返回值
///
/// 按源顺序排列的存活声明。重复的属性名不做去重，原样按序输出。
/// 空输入或全部声明被丢弃时返回空序列，由调用方决定省略整个属性。
///
/// # 丢弃规则
///
/// - 片段中没有 `:`（如单独的 `width`）
/// - 属性名或值在去除空白后为空（如 `color:`、`;;;`）
/// - 值中含有危险模式
pub fn sanitize_style(style_attr_value: &str) -> Vec<StyleDeclaration> {
    let mut declarations: Vec<StyleDeclaration> = Vec::new();

    for segment in style_attr_value.split(';') {
        // 只按第一个冒号拆分：值里可能合法地出现冒号，例如 url(http://...)
        let (property, value) = match segment.split_once(':') {
            Some(pair) => pair,
            None => continue,
        };

        let property = property.trim();
        let value = value.trim();

        if property.is_empty() || value.is_empty() {
            continue;
        }

        if dangerous_style_pattern().is_match(value) {
            debug!(property, "dropping style declaration with dangerous value");
            continue;
        }

        declarations.push(StyleDeclaration {
            property: camelize_property(property),
            value: value.to_string(),
        });
    }

    declarations
}

/// 将连字符形式的属性名转换为驼峰形式
///
/// `max-width` → `maxWidth`；不含连字符的属性名原样返回。
/// 带厂商前缀的属性按同样的规则处理（`-webkit-transform` → `WebkitTransform`）。
pub fn camelize_property(property: &str) -> String {
    let mut camelized = String::with_capacity(property.len());
    let mut uppercase_next = false;

    for c in property.chars() {
        if c == '-' {
            uppercase_next = true;
        } else if uppercase_next {
            camelized.extend(c.to_uppercase());
            uppercase_next = false;
        } else {
            camelized.push(c);
        }
    }

    camelized
}

/// `camelize_property` 的逆变换，供 HTML 构建器输出标准 CSS 属性名
///
/// `maxWidth` → `max-width`；`WebkitTransform` → `-webkit-transform`。
pub fn hyphenate_property(property: &str) -> String {
    let mut hyphenated = String::with_capacity(property.len() + 4);

    for c in property.chars() {
        if c.is_ascii_uppercase() {
            hyphenated.push('-');
            hyphenated.push(c.to_ascii_lowercase());
        } else {
            hyphenated.push(c);
        }
    }

    hyphenated
}

//! URL 安全策略模块
//!
//! 此模块对 `href` / `src` 属性值做上下文相关的安全判定。两种属性角色
//! 使用不同的协议白名单：`href` 是用户主动发起的跳转，允许 `mailto:` 和
//! `tel:`；`src` 是被动加载的资源，只允许 `http` / `https`。这个不对称
//! 是有意为之。
//!
//! # 主要功能
//!
//! - **协议白名单**: 按属性角色匹配允许的协议集合
//! - **危险协议拦截**: `javascript:`、`vbscript:`、`data:` 一律拒绝
//! - **协议相对 URL 拦截**: 以 `//` 开头的值继承页面协议，目标不可控
//! - **相对引用放行**: 片段（`#...`）、根相对（`/...`）和相对路径原样保留
//!
//! 协议识别是纯语法层面的：只有开头的 `scheme:` 前缀算协议，路径里出现
//! 的 `:`（如端口号）不会被误判。这里直接复用 `url` crate 的 WHATWG
//! 协议语法，解析失败且原因是缺少基准 URL 时即为相对引用。
//!
//! 判定结果只依赖字符串本身，不做任何网络或文件系统访问。

use tracing::debug;
use url::Url;

/// `href` 角色允许的协议
const HREF_SAFE_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// `src` 角色允许的协议
const SRC_SAFE_SCHEMES: &[&str] = &["http", "https"];

/// 两种角色都必须拒绝的注入协议
const DANGEROUS_SCHEMES: &[&str] = &["javascript", "vbscript", "data"];

/// URL 属性的角色
///
/// 同一个值在不同角色下可能得到不同的判定结果，
/// 所以调用方必须先声明属性角色。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlRole {
    /// 用户主动导航（`<a href>` 等）
    Href,
    /// 被动资源加载（`<img src>` 等）
    Src,
}

impl UrlRole {
    /// 根据属性名识别 URL 角色
    pub fn from_attr_name(attr_name: &str) -> Option<UrlRole> {
        match attr_name {
            "href" => Some(UrlRole::Href),
            "src" => Some(UrlRole::Src),
            _ => None,
        }
    }

    fn safe_schemes(&self) -> &'static [&'static str] {
        match self {
            UrlRole::Href => HREF_SAFE_SCHEMES,
            UrlRole::Src => SRC_SAFE_SCHEMES,
        }
    }
}

/// URL 判定结果
///
/// 使用显式的标签变体而不是布尔值，强制每个调用点处理被拒绝的情况。
/// `Rejected` 意味着属性整体从输出节点中省略，绝不改写为空值或占位值。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlVerdict {
    /// 值可以原样保留
    Allowed(String),
    /// 值被拒绝，属性应当被丢弃
    Rejected,
}

/// 按属性角色判定一个 URL 属性值
///
/// # 参数
///
/// * `role` - 属性角色（`href` 或 `src`）
/// * `raw_value` - 属性值原文，不做任何预处理
///
/// # 返回值
///
/// `Allowed` 携带未经改写的原始值；`Rejected` 表示属性必须被丢弃。
///
/// # 判定规则
///
/// 1. 空值（含纯空白）拒绝
/// 2. 协议相对值（去除首尾空白后以 `//` 开头）拒绝
/// 3. 带协议的值按角色白名单匹配，危险协议一律拒绝
/// 4. 无协议的相对引用放行
/// 5. 其余解析失败一律拒绝（fail-closed）
pub fn evaluate_url(role: UrlRole, raw_value: &str) -> UrlVerdict {
    // 浏览器解析前会剥掉首尾空白，这里的拦截检查必须看齐，
    // 否则 " //evil.com" 会绕过协议相对检查
    let trimmed = raw_value.trim();

    if trimmed.is_empty() {
        return UrlVerdict::Rejected;
    }

    if trimmed.starts_with("//") {
        debug!(value = raw_value, "rejecting protocol-relative URL");
        return UrlVerdict::Rejected;
    }

    match Url::parse(trimmed) {
        Ok(parsed) => {
            let scheme = parsed.scheme();

            if DANGEROUS_SCHEMES.contains(&scheme) {
                debug!(scheme, "rejecting URL with dangerous scheme");
                return UrlVerdict::Rejected;
            }

            if role.safe_schemes().contains(&scheme) {
                UrlVerdict::Allowed(raw_value.to_string())
            } else {
                // 未列入白名单的协议（ftp:、sms: 等）一律拒绝
                debug!(scheme, ?role, "rejecting URL with unlisted scheme");
                UrlVerdict::Rejected
            }
        }
        // 无协议的相对引用：#fragment、/path、./x、../x、裸路径
        Err(url::ParseError::RelativeUrlWithoutBase) => UrlVerdict::Allowed(raw_value.to_string()),
        Err(_) => UrlVerdict::Rejected,
    }
}

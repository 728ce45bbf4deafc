//! 统一的环境变量管理系统
//!
//! 提供类型安全、可验证的环境变量访问，供 CLI 在没有显式命令行参数时
//! 读取默认配置。

use std::env;
use std::fmt;

use crate::core::DEFAULT_MAX_DEPTH;

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Environment variable '{}': {}",
            self.variable, self.message
        )
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }
}

/// 核心环境变量定义
pub mod core {
    use super::*;

    /// 日志级别
    pub struct Log;
    impl EnvVar<tracing::Level> for Log {
        const NAME: &'static str = "MARKSAFE_LOG";
        const DEFAULT: Option<tracing::Level> = Some(tracing::Level::WARN);
        const DESCRIPTION: &'static str = "Log level: error, warn, info, debug, trace";

        fn parse(value: &str) -> EnvResult<tracing::Level> {
            match value.to_lowercase().as_str() {
                "error" => Ok(tracing::Level::ERROR),
                "warn" => Ok(tracing::Level::WARN),
                "info" => Ok(tracing::Level::INFO),
                "debug" => Ok(tracing::Level::DEBUG),
                "trace" => Ok(tracing::Level::TRACE),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid level '{}'. Use: error, warn, info, debug, trace",
                        value
                    ),
                }),
            }
        }
    }

    /// 递归深度上限
    pub struct MaxDepth;
    impl EnvVar<usize> for MaxDepth {
        const NAME: &'static str = "MARKSAFE_MAX_DEPTH";
        const DEFAULT: Option<usize> = Some(DEFAULT_MAX_DEPTH);
        const DESCRIPTION: &'static str = "Recursion depth ceiling for untrusted input trees";

        fn parse(value: &str) -> EnvResult<usize> {
            value.parse::<usize>().map_err(|_| EnvError {
                variable: Self::NAME.to_string(),
                message: format!("Invalid depth '{}'. Use a positive integer", value),
            })
        }
    }
}

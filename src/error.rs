use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 学习路径服务的错误类型
///
/// 每一种失败都保留自己的类别，调用方据此决定是降级到离线替身还是直接返回错误。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LearnPathError {
    /// 缺少或无效的凭据，直接报告给调用方，不重试
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// 远端限流/配额耗尽，由离线替身在本地兜底
    #[error("Quota exhausted: {0}")]
    QuotaExhausted(String),

    /// 远端输出不是合法JSON或结构不符合约定
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// 分类器没有匹配的领域，且生成服务也未能给出路径
    #[error("No path available: {0}")]
    UnknownDomain(String),

    /// 网络错误或超时，按配额耗尽同样处理
    #[error("Upstream transient failure: {0}")]
    UpstreamTransient(String),

    /// 其他不透明的远端错误
    #[error("Upstream error: {0}")]
    Upstream(String),
}

/// 对外暴露的错误类别标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ConfigurationError,
    QuotaExhausted,
    MalformedResponse,
    UnknownDomain,
    UpstreamTransient,
    UpstreamError,
    InvalidRequest,
}

impl LearnPathError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LearnPathError::Configuration(_) => ErrorKind::ConfigurationError,
            LearnPathError::QuotaExhausted(_) => ErrorKind::QuotaExhausted,
            LearnPathError::MalformedResponse(_) => ErrorKind::MalformedResponse,
            LearnPathError::UnknownDomain(_) => ErrorKind::UnknownDomain,
            LearnPathError::UpstreamTransient(_) => ErrorKind::UpstreamTransient,
            LearnPathError::Upstream(_) => ErrorKind::UpstreamError,
        }
    }

    /// 是否可以用离线替身替代本次调用
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LearnPathError::QuotaExhausted(_) | LearnPathError::UpstreamTransient(_)
        )
    }

    /// 根据HTTP状态码判断错误类别
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            429 => LearnPathError::QuotaExhausted(message),
            408 | 500..=599 => LearnPathError::UpstreamTransient(message),
            _ => LearnPathError::Upstream(message),
        }
    }

    /// 根据远端返回的错误文本判断错误类别，只在没有状态码可用时使用
    pub fn from_provider_message(message: impl Into<String>) -> Self {
        let message = message.into();

        if QUOTA_PATTERN.is_match(&message) {
            LearnPathError::QuotaExhausted(message)
        } else if TRANSIENT_PATTERN.is_match(&message) {
            LearnPathError::UpstreamTransient(message)
        } else {
            LearnPathError::Upstream(message)
        }
    }
}

static QUOTA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b429\b|\bresource_exhausted\b|\binsufficient_quota\b|\bquota\b",
        r"|\brate[ _-]?limit|\btoo many requests\b",
    ))
    .expect("quota pattern is a valid regex")
});

static TRANSIENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b50[0234]\b|\btimed out\b|\bdeadline exceeded\b|\bunavailable\b",
        r"|\boverloaded\b|\bconnection (refused|reset|closed|aborted)\b",
        r"|\breset by peer\b|\berror sending request\b",
    ))
    .expect("transient pattern is a valid regex")
});

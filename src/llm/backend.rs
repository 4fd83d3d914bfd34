use async_trait::async_trait;

use crate::error::LearnPathError;

/// 给生成服务的输出格式提示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// 结构化JSON输出
    Json,
    /// 自由文本
    Text,
}

impl std::fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseFormat::Json => write!(f, "application/json"),
            ResponseFormat::Text => write!(f, "text/plain"),
        }
    }
}

/// 外部生成能力的抽象
///
/// 实现方负责把远端错误归类为 `QuotaExhausted`、`UpstreamTransient` 或 `Upstream`。
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        format: ResponseFormat,
    ) -> Result<String, LearnPathError>;
}

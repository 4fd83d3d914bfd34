//! LLM客户端 - 基于rig的生成能力实现

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use rig::completion::{CompletionError, PromptError};
use rig::http_client;

use crate::config::LLMConfig;
use crate::error::LearnPathError;
use crate::llm::backend::{GenerativeBackend, ResponseFormat};

mod providers;
pub mod utils;

use providers::ProviderClient;

/// 所有请求共用的系统提示词
const SYSTEM_PROMPT: &str = "You are LearnPath, an expert curriculum designer and a patient, encouraging tutor. Follow the requested output format exactly.";

/// LLM客户端 - 提供统一的LLM服务接口
#[derive(Clone)]
pub struct LLMClient {
    config: LLMConfig,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端，缺少凭据时返回错误
    pub fn new(config: LLMConfig) -> Result<Self> {
        if !config.has_credential() {
            anyhow::bail!(
                "No API key configured for provider {}; set LEARNPATH_LLM_API_KEY or GEMINI_API_KEY",
                config.provider
            );
        }
        let client = ProviderClient::new(&config)?;
        Ok(Self { client, config })
    }

    /// 检查模型连接和功能是否正常
    pub async fn check_connection(&self) -> Result<()> {
        tracing::info!("🔄 正在检查模型连接...");
        let reply = self
            .generate(
                &self.config.model_efficient,
                "Reply with the single word OK.",
                ResponseFormat::Text,
            )
            .await;
        match reply {
            Ok(_) => {
                tracing::info!("✅ 模型连接正常");
                Ok(())
            }
            Err(e) => {
                tracing::error!("❌ 模型连接失败: {}", e);
                Err(e.into())
            }
        }
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_seconds)
    }
}

#[async_trait]
impl GenerativeBackend for LLMClient {
    /// 单次调用，不重试；超时按瞬时故障处理
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        format: ResponseFormat,
    ) -> Result<String, LearnPathError> {
        let agent = self
            .client
            .create_agent(model, SYSTEM_PROMPT, format, &self.config)
            .map_err(|e| LearnPathError::Configuration(e.to_string()))?;

        tracing::debug!("调用模型 {} ({}), prompt长度 {}", model, format, prompt.len());

        match tokio::time::timeout(self.timeout(), agent.prompt(prompt)).await {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(classify_prompt_error(&e)),
            Err(_) => Err(LearnPathError::UpstreamTransient(format!(
                "model {} did not answer within {}s",
                model, self.config.timeout_seconds
            ))),
        }
    }
}

/// 按rig的错误类型归类；只有provider返回的错误正文才退回到文本匹配
fn classify_prompt_error(err: &PromptError) -> LearnPathError {
    let message = err.to_string();
    match err {
        PromptError::CompletionError(CompletionError::HttpError(http_err)) => match http_err {
            http_client::Error::InvalidStatusCode(status)
            | http_client::Error::InvalidStatusCodeWithMessage(status, _) => {
                LearnPathError::from_status(status.as_u16(), message)
            }
            http_client::Error::Protocol(_) | http_client::Error::InvalidContentType(_) => {
                LearnPathError::Upstream(message)
            }
            // 连接失败、连接中断等传输层错误
            _ => LearnPathError::UpstreamTransient(message),
        },
        PromptError::CompletionError(CompletionError::ProviderError(_)) => {
            LearnPathError::from_provider_message(message)
        }
        _ => LearnPathError::Upstream(message),
    }
}

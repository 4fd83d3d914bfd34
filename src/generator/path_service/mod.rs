use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::config::LLMConfig;
use crate::error::LearnPathError;
use crate::generator::fallback::FallbackSubstitute;
use crate::generator::prompts;
use crate::generator::validation::validate_tree;
use crate::llm::GenerativeBackend;
use crate::llm::ResponseFormat;
use crate::llm::client::utils::{ModelTier, evaluate_befitting_model, strip_code_fences};
use crate::types::{Level, PathNode, PathTree};

/// 模型返回的树形结果可能的几种形态
#[derive(Deserialize)]
#[serde(untagged)]
enum TreeReply {
    Failure { error: Value },
    Wrapped(PathTree),
    Bare(PathNode),
}

/// 基于生成能力的学习路径服务，配额或网络故障时降级到离线替身
#[derive(Clone)]
pub struct GenerativePathService {
    backend: Option<Arc<dyn GenerativeBackend>>,
    llm_config: LLMConfig,
    fallback: FallbackSubstitute,
}

impl GenerativePathService {
    pub fn new(backend: Option<Arc<dyn GenerativeBackend>>, llm_config: LLMConfig) -> Self {
        Self {
            backend,
            llm_config,
            fallback: FallbackSubstitute,
        }
    }

    /// 生成完整学习路径，未配置凭据时直接返回配置错误
    pub async fn generate_full_path(
        &self,
        topic: &str,
        level: Level,
    ) -> Result<PathTree, LearnPathError> {
        let backend = self.backend.as_ref().ok_or_else(|| {
            LearnPathError::Configuration("no generative backend credential configured".to_string())
        })?;

        let prompt = prompts::full_path_prompt(topic, level, None);
        self.request_tree(backend.as_ref(), &prompt)
            .await
            .or_else(|e| self.recover_path(e, topic, level))
    }

    /// `/process` 使用的路径生成，带钻取上下文；未配置凭据时使用离线替身
    pub async fn process_request(
        &self,
        topic: &str,
        level: Level,
        selected_node: &str,
    ) -> Result<PathTree, LearnPathError> {
        let Some(backend) = self.backend.as_ref() else {
            tracing::warn!("⚠️ 未配置生成服务凭据，使用离线学习路径: {}", topic);
            return Ok(self.fallback.build_path(topic, level));
        };

        let prompt = prompts::full_path_prompt(topic, level, Some(selected_node));
        self.request_tree(backend.as_ref(), &prompt)
            .await
            .or_else(|e| self.recover_path(e, topic, level))
    }

    /// 请求3-5个补充子主题，任何失败都折叠为单条说明
    pub async fn enrich_path(
        &self,
        domain: &str,
        goal: &str,
        current_node_ids: &[String],
    ) -> Vec<String> {
        let Some(backend) = self.backend.as_ref() else {
            return vec!["Ensure API Key is set".to_string()];
        };

        let model = evaluate_befitting_model(&self.llm_config, ModelTier::Efficient);
        let prompt = prompts::enrich_prompt(domain, goal, current_node_ids);
        match backend.generate(&model, &prompt, ResponseFormat::Json).await {
            Ok(raw) => match parse_suggestions(&raw) {
                Ok(suggestions) => suggestions,
                Err(e) => {
                    tracing::warn!("⚠️ 补充建议解析失败: {}", e);
                    vec![format!("Error: {}", e)]
                }
            },
            Err(e) => {
                tracing::warn!("⚠️ 补充建议请求失败: {}", e);
                vec![format!("Error: {}", e)]
            }
        }
    }

    /// 辅导问答，配额耗尽或网络故障时返回模板回复
    pub async fn tutor_response(
        &self,
        query: &str,
        topic: &str,
        level: Level,
        node_context: &str,
    ) -> Result<String, LearnPathError> {
        let Some(backend) = self.backend.as_ref() else {
            tracing::warn!("⚠️ 未配置生成服务凭据，使用离线辅导回复");
            return Ok(self.fallback.tutor_reply(query, node_context));
        };

        let model = evaluate_befitting_model(&self.llm_config, ModelTier::Efficient);
        let prompt = prompts::tutor_prompt(query, topic, level, node_context);
        match backend.generate(&model, &prompt, ResponseFormat::Text).await {
            Ok(text) => Ok(text.trim().to_string()),
            Err(e) if e.is_recoverable() => {
                tracing::warn!("⚠️ 辅导问答降级到离线回复: {}", e);
                Ok(self.fallback.tutor_reply(query, node_context))
            }
            Err(e) => Err(e),
        }
    }

    async fn request_tree(
        &self,
        backend: &dyn GenerativeBackend,
        prompt: &str,
    ) -> Result<PathTree, LearnPathError> {
        let model = evaluate_befitting_model(&self.llm_config, ModelTier::Powerful);
        let raw = backend.generate(&model, prompt, ResponseFormat::Json).await?;
        let path = parse_path_tree(&raw)?;
        let stats = validate_tree(&path.tree)?;
        tracing::debug!(
            "学习路径生成完成: {} 个节点, 深度 {}, {} 个叶子",
            stats.node_count,
            stats.depth,
            stats.leaf_count
        );
        Ok(path)
    }

    fn recover_path(
        &self,
        err: LearnPathError,
        topic: &str,
        level: Level,
    ) -> Result<PathTree, LearnPathError> {
        if err.is_recoverable() {
            tracing::warn!("⚠️ 学习路径生成降级到离线替身: {}", err);
            Ok(self.fallback.build_path(topic, level))
        } else {
            Err(err)
        }
    }
}

/// 解析模型返回的学习路径，兼容 `{tree, chatbot}` 包装和裸根节点两种形态
pub fn parse_path_tree(raw: &str) -> Result<PathTree, LearnPathError> {
    let body = strip_code_fences(raw);
    let value: Value = serde_json::from_str(body)
        .map_err(|e| LearnPathError::MalformedResponse(format!("response is not JSON: {}", e)))?;

    let reply: TreeReply = serde_json::from_value(value).map_err(|e| {
        LearnPathError::MalformedResponse(format!("unexpected path tree shape: {}", e))
    })?;

    match reply {
        TreeReply::Failure { error } => Err(LearnPathError::Upstream(render_value(&error))),
        TreeReply::Wrapped(path) => Ok(path),
        TreeReply::Bare(tree) => Ok(PathTree {
            tree,
            chatbot: None,
        }),
    }
}

/// 解析补充建议，`null` 与非数组值按约定折叠
pub fn parse_suggestions(raw: &str) -> Result<Vec<String>, LearnPathError> {
    let body = strip_code_fences(raw);
    let value: Value = serde_json::from_str(body)
        .map_err(|e| LearnPathError::MalformedResponse(format!("response is not JSON: {}", e)))?;

    Ok(match value {
        Value::Null => vec!["No suggestions available (Null response)".to_string()],
        Value::Array(items) => items.iter().map(render_value).collect(),
        other => vec![render_value(&other)],
    })
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// Include tests
#[cfg(test)]
mod tests;

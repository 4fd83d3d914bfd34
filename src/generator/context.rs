use std::sync::Arc;

use crate::classifier::DomainClassifier;
use crate::config::Config;
use crate::generator::orchestrator::PathOrchestrator;
use crate::generator::path_service::GenerativePathService;
use crate::llm::{GenerativeBackend, LLMClient};
use crate::types::{DomainCorpus, KnowledgeGraph};

/// 应用上下文，启动时构建一次，所有请求共享只读状态
#[derive(Clone)]
pub struct AppContext {
    /// 已拟合的领域分类器
    pub classifier: Arc<DomainClassifier>,
    /// 静态知识图谱
    pub knowledge_graph: Arc<KnowledgeGraph>,
    /// 请求编排
    pub orchestrator: PathOrchestrator,
}

impl AppContext {
    /// 按配置加载数据文件并创建生成后端
    pub fn new(config: Config) -> Self {
        let corpus = DomainCorpus::load_or_empty(&config.data.domains_path);
        let knowledge_graph = KnowledgeGraph::load_or_empty(&config.data.knowledge_graph_path);
        let backend = build_backend(&config);
        Self::from_parts(config, corpus, knowledge_graph, backend)
    }

    /// 用给定的数据和后端组装上下文
    pub fn from_parts(
        config: Config,
        corpus: DomainCorpus,
        knowledge_graph: KnowledgeGraph,
        backend: Option<Arc<dyn GenerativeBackend>>,
    ) -> Self {
        let classifier = Arc::new(DomainClassifier::fit(&corpus));
        let knowledge_graph = Arc::new(knowledge_graph);
        let path_service = GenerativePathService::new(backend, config.llm);
        let orchestrator =
            PathOrchestrator::new(classifier.clone(), knowledge_graph.clone(), path_service);

        tracing::info!(
            "📚 已加载 {} 个领域语料，{} 个领域知识图谱",
            corpus.len(),
            knowledge_graph.len()
        );

        Self {
            classifier,
            knowledge_graph,
            orchestrator,
        }
    }
}

/// 缺少凭据或客户端创建失败时返回None，相关操作走离线替身
fn build_backend(config: &Config) -> Option<Arc<dyn GenerativeBackend>> {
    if !config.llm.has_credential() {
        tracing::warn!(
            "⚠️ 未配置 {} 的API KEY，生成服务不可用，将使用离线替身",
            config.llm.provider
        );
        return None;
    }

    match LLMClient::new(config.llm.clone()) {
        Ok(client) => {
            tracing::info!("🤖 生成服务已就绪: {}", config.llm.provider);
            let backend: Arc<dyn GenerativeBackend> = Arc::new(client);
            Some(backend)
        }
        Err(e) => {
            tracing::warn!("⚠️ 生成服务客户端创建失败，将使用离线替身: {:#}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DataConfig, LLMConfig, LLMProvider};
    use crate::types::Level;
    use tempfile::TempDir;

    #[test]
    fn test_missing_data_files_yield_empty_state() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            llm: LLMConfig {
                provider: LLMProvider::Gemini,
                api_key: String::new(),
                ..LLMConfig::default()
            },
            data: DataConfig {
                domains_path: temp_dir.path().join("missing_domains.json"),
                knowledge_graph_path: temp_dir.path().join("missing_kg.json"),
            },
            ..Config::default()
        };

        let context = AppContext::new(config);
        assert!(context.classifier.domains().is_empty());
        assert!(context.knowledge_graph.is_empty());
        assert!(!context.classifier.is_fitted());
    }

    #[tokio::test]
    async fn test_loads_data_files() {
        let temp_dir = TempDir::new().unwrap();
        let domains_path = temp_dir.path().join("domains.json");
        let kg_path = temp_dir.path().join("knowledge_graph.json");
        std::fs::write(&domains_path, r#"{"rust": ["cargo", "borrow", "ownership"]}"#).unwrap();
        std::fs::write(
            &kg_path,
            r#"{"rust": {"nodes": [{"id": "cargo", "level": 0}], "edges": [], "algorithms": []}}"#,
        )
        .unwrap();

        let config = Config {
            llm: LLMConfig {
                api_key: String::new(),
                ..LLMConfig::default()
            },
            data: DataConfig {
                domains_path,
                knowledge_graph_path: kg_path,
            },
            ..Config::default()
        };
        let context = AppContext::new(config);
        assert_eq!(context.classifier.domains(), ["rust".to_string()]);
        assert_eq!(context.knowledge_graph.len(), 1);

        let result = context
            .orchestrator
            .generate_path("cargo and ownership", Level::Beginner)
            .await;
        assert!(!result.is_error());
    }
}

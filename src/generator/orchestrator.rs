use std::sync::Arc;

use crate::classifier::DomainClassifier;
use crate::error::LearnPathError;
use crate::generator::fallback::title_case;
use crate::generator::path_service::GenerativePathService;
use crate::types::{
    ErrorResult, FlatGraphResult, FlatModule, KnowledgeGraph, Level, PathResult, PathTree,
    TreeResult,
};

/// 串联领域识别、路径生成和静态知识图谱兜底
#[derive(Clone)]
pub struct PathOrchestrator {
    classifier: Arc<DomainClassifier>,
    knowledge_graph: Arc<KnowledgeGraph>,
    path_service: GenerativePathService,
}

impl PathOrchestrator {
    pub fn new(
        classifier: Arc<DomainClassifier>,
        knowledge_graph: Arc<KnowledgeGraph>,
        path_service: GenerativePathService,
    ) -> Self {
        Self {
            classifier,
            knowledge_graph,
            path_service,
        }
    }

    /// `/process`：直接生成，不做领域识别
    pub async fn process(
        &self,
        topic: &str,
        level: Level,
        selected_node: &str,
    ) -> Result<PathTree, LearnPathError> {
        self.path_service
            .process_request(topic, level, selected_node)
            .await
    }

    /// `/generate_path`：优先返回生成的树，失败时退回到识别出的领域的静态图
    pub async fn generate_path(&self, text: &str, level: Level) -> PathResult {
        let classification = self.classifier.classify(text);
        tracing::info!(
            "🔍 领域识别: {:?} (置信度 {:.3})",
            classification.domain,
            classification.confidence
        );

        let generation_error = match self.path_service.generate_full_path(text, level).await {
            Ok(path) => {
                return PathResult::Tree(TreeResult {
                    path,
                    detected_domain: classification.domain,
                    confidence: classification.confidence,
                });
            }
            Err(e) => e,
        };
        tracing::warn!("⚠️ 学习路径生成失败，尝试静态知识图谱: {}", generation_error);

        let matched = classification
            .domain
            .as_deref()
            .and_then(|domain| self.knowledge_graph.get(domain).map(|graph| (domain, graph)));

        let Some((domain, graph)) = matched else {
            let err = LearnPathError::UnknownDomain(format!(
                "no known domain matches \"{}\" ({})",
                text, generation_error
            ));
            return PathResult::Error(ErrorResult::from(err));
        };

        let max_level = level.max_graph_depth();
        let (nodes, edges) = graph.filter_by_level(max_level);
        let node_ids: Vec<String> = nodes.iter().map(|n| n.id.clone()).collect();
        let ai_suggestions = self.path_service.enrich_path(domain, text, &node_ids).await;

        PathResult::FlatGraph(FlatGraphResult {
            domain: domain.to_string(),
            confidence: classification.confidence,
            modules: vec![FlatModule {
                title: title_case(&domain.replace('_', " ")),
                max_level,
                nodes,
                edges,
            }],
            algorithms: graph.algorithms.clone(),
            ai_suggestions,
        })
    }

    /// `/chat`：辅导问答
    pub async fn chat(
        &self,
        query: &str,
        topic: &str,
        level: Level,
        node_context: &str,
    ) -> Result<String, LearnPathError> {
        self.path_service
            .tutor_response(query, topic, level, node_context)
            .await
    }
}

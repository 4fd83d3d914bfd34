//! 领域分类器 - 基于TF-IDF与余弦相似度的最近质心分类

use serde::{Deserialize, Serialize};

use crate::types::DomainCorpus;

pub mod tokenizer;
pub mod vector_space;

pub use vector_space::{ClassifierError, VectorSpace};

/// 分类结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// 匹配的领域，仅在语料为空时缺失
    pub domain: Option<String>,
    /// 余弦相似度，范围 [0, 1]
    pub confidence: f64,
}

impl ClassificationResult {
    pub fn absent() -> Self {
        Self {
            domain: None,
            confidence: 0.0,
        }
    }
}

/// 领域分类器
///
/// 语料为空时处于退化状态，`classify` 恒返回 `(None, 0.0)`。
#[derive(Debug, Clone)]
pub struct DomainClassifier {
    space: Option<VectorSpace>,
}

impl DomainClassifier {
    /// 在领域语料上拟合分类器
    pub fn fit(corpus: &DomainCorpus) -> Self {
        match VectorSpace::fit(corpus) {
            Ok(space) => {
                tracing::info!(
                    "✅ 领域分类器拟合完成: {} 个领域, 词表大小 {}",
                    space.domains().len(),
                    space.vocabulary_size()
                );
                Self { space: Some(space) }
            }
            Err(e) => {
                tracing::warn!("⚠️ 领域分类器进入退化状态: {}", e);
                Self { space: None }
            }
        }
    }

    pub fn is_fitted(&self) -> bool {
        self.space.is_some()
    }

    pub fn domains(&self) -> &[String] {
        self.space.as_ref().map(VectorSpace::domains).unwrap_or(&[])
    }

    /// 对任意文本分类，相似度并列时取语料中靠前的领域
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let Some(space) = &self.space else {
            return ClassificationResult::absent();
        };

        let similarities = space.similarities(text);
        let mut best_idx = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (idx, &score) in similarities.iter().enumerate() {
            if score > best_score {
                best_idx = idx;
                best_score = score;
            }
        }

        match space.domains().get(best_idx) {
            Some(domain) => ClassificationResult {
                domain: Some(domain.clone()),
                confidence: best_score.clamp(0.0, 1.0),
            },
            None => ClassificationResult::absent(),
        }
    }
}

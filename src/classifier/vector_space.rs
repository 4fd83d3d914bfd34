//! TF-IDF向量空间

use std::collections::{BTreeSet, HashMap};

use thiserror::Error;

use super::tokenizer::tokenize;
use crate::types::DomainCorpus;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    #[error("Domain corpus is empty")]
    EmptyCorpus,

    #[error("Domain corpus produced an empty vocabulary")]
    EmptyVocabulary,
}

/// 由领域语料拟合出的词表与权重矩阵
///
/// 词表和矩阵只能通过 [`VectorSpace::fit`] 一起构建，拟合后只读。
#[derive(Debug, Clone)]
pub struct VectorSpace {
    domains: Vec<String>,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    /// 每个领域一行，已做L2归一化
    matrix: Vec<Vec<f64>>,
}

impl VectorSpace {
    /// 每个领域的关键词拼成一个文档，按平滑IDF计算权重
    pub fn fit(corpus: &DomainCorpus) -> Result<Self, ClassifierError> {
        if corpus.is_empty() {
            return Err(ClassifierError::EmptyCorpus);
        }

        let documents: Vec<Vec<String>> = corpus
            .entries()
            .iter()
            .map(|entry| tokenize(&entry.keywords.join(" ")))
            .collect();

        let terms: BTreeSet<&str> = documents
            .iter()
            .flat_map(|doc| doc.iter().map(String::as_str))
            .collect();
        if terms.is_empty() {
            return Err(ClassifierError::EmptyVocabulary);
        }

        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term.to_string(), idx))
            .collect();

        // 文档频率
        let mut document_frequency = vec![0usize; vocabulary.len()];
        for doc in &documents {
            let unique: BTreeSet<usize> = doc
                .iter()
                .filter_map(|t| vocabulary.get(t).copied())
                .collect();
            for idx in unique {
                document_frequency[idx] += 1;
            }
        }

        let n_documents = documents.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n_documents) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let mut space = Self {
            domains: corpus.domain_names().map(str::to_string).collect(),
            vocabulary,
            idf,
            matrix: Vec::with_capacity(documents.len()),
        };
        space.matrix = documents.iter().map(|doc| space.weigh(doc)).collect();

        Ok(space)
    }

    /// 用拟合好的词表把文本转成归一化的TF-IDF向量，词表外的词元被忽略
    pub fn transform(&self, text: &str) -> Vec<f64> {
        self.weigh(&tokenize(text))
    }

    fn weigh(&self, tokens: &[String]) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];
        for token in tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                vector[idx] += 1.0;
            }
        }
        for (value, idf) in vector.iter_mut().zip(&self.idf) {
            *value *= idf;
        }
        l2_normalize(&mut vector);
        vector
    }

    /// 输入文本与每个领域的余弦相似度，顺序与语料一致
    pub fn similarities(&self, text: &str) -> Vec<f64> {
        let query = self.transform(text);
        self.matrix
            .iter()
            .map(|row| cosine_similarity(&query, row))
            .collect()
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

fn l2_normalize(vector: &mut [f64]) {
    let norm = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for value in vector.iter_mut() {
            *value /= norm;
        }
    }
}

/// 零向量与任何向量的相似度为0
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

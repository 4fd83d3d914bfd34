use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// 单个领域及其代表性关键词
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainEntry {
    pub domain_name: String,
    pub keywords: Vec<String>,
}

/// 领域语料：领域名到关键词列表的静态映射
///
/// 文件中键的顺序就是语料的迭代顺序，分类器用它打破平局，所以这里不用HashMap。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainCorpus {
    entries: Vec<DomainEntry>,
}

impl DomainCorpus {
    /// 从有序的(领域, 关键词)对构建语料，重复的领域名保留第一次出现的位置并合并关键词
    pub fn from_pairs<I, S, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<K>)>,
        S: Into<String>,
        K: Into<String>,
    {
        let mut entries: Vec<DomainEntry> = Vec::new();
        for (name, keywords) in pairs {
            let name = name.into();
            let keywords: Vec<String> = keywords.into_iter().map(Into::into).collect();
            match entries.iter_mut().find(|e| e.domain_name == name) {
                Some(existing) => existing.keywords.extend(keywords),
                None => entries.push(DomainEntry {
                    domain_name: name,
                    keywords,
                }),
            }
        }
        Self { entries }
    }

    /// 从JSON文件加载
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read domain corpus: {:?}", path))?;
        serde_json::from_str(&content).context("Failed to parse domain corpus")
    }

    /// 加载语料，失败时退化为空语料
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(corpus) => corpus,
            Err(e) => {
                tracing::warn!("⚠️ 无法加载领域语料，分类器将处于退化状态: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn entries(&self) -> &[DomainEntry] {
        &self.entries
    }

    pub fn domain_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.domain_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for DomainCorpus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CorpusVisitor;

        impl<'de> Visitor<'de> for CorpusVisitor {
            type Value = DomainCorpus;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of domain name to keyword list")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs: Vec<(String, Vec<String>)> = Vec::new();
                while let Some((name, keywords)) = map.next_entry::<String, Vec<String>>()? {
                    pairs.push((name, keywords));
                }
                Ok(DomainCorpus::from_pairs(pairs))
            }
        }

        deserializer.deserialize_map(CorpusVisitor)
    }
}

impl Serialize for DomainCorpus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.domain_name, &entry.keywords)?;
        }
        map.end()
    }
}

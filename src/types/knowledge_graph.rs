use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 扁平图中的节点，除id与level外的字段原样保留
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatNode {
    pub id: String,
    pub level: u32,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatEdge {
    pub from: String,
    pub to: String,
}

/// 某个领域的静态课程图
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainGraph {
    #[serde(default)]
    pub nodes: Vec<FlatNode>,
    #[serde(default)]
    pub edges: Vec<FlatEdge>,
    #[serde(default)]
    pub algorithms: Vec<String>,
}

impl DomainGraph {
    /// 只保留层级不超过 `max_level` 的节点，并丢弃端点不在保留节点中的边
    pub fn filter_by_level(&self, max_level: u32) -> (Vec<FlatNode>, Vec<FlatEdge>) {
        let nodes: Vec<FlatNode> = self
            .nodes
            .iter()
            .filter(|n| n.level <= max_level)
            .cloned()
            .collect();
        let node_ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();

        let edges = self
            .edges
            .iter()
            .filter(|e| node_ids.contains(e.from.as_str()) && node_ids.contains(e.to.as_str()))
            .cloned()
            .collect();

        (nodes, edges)
    }
}

/// 领域名到静态课程图的映射，启动时加载一次
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeGraph {
    domains: HashMap<String, DomainGraph>,
}

impl KnowledgeGraph {
    pub fn new(domains: HashMap<String, DomainGraph>) -> Self {
        Self { domains }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read knowledge graph: {:?}", path))?;
        serde_json::from_str(&content).context("Failed to parse knowledge graph")
    }

    /// 加载知识图谱，失败时退化为空图
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(graph) => graph,
            Err(e) => {
                tracing::warn!("⚠️ 无法加载知识图谱，静态路径兜底不可用: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn get(&self, domain: &str) -> Option<&DomainGraph> {
        self.domains.get(domain)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

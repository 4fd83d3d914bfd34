use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, LearnPathError};
use crate::types::knowledge_graph::{FlatEdge, FlatNode};

/// 树中节点的角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Root,
    Parent,
    Leaf,
}

/// 学习路径树上的一个节点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PathNode {
    /// 节点标题
    pub title: String,
    /// 节点角色
    pub role: NodeRole,
    /// 节点内容说明
    #[serde(default)]
    pub explanation: String,
    /// 子节点，叶子节点为空
    #[serde(default)]
    pub children: Vec<PathNode>,
    /// 实践任务，仅叶子节点
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    /// 小测验，仅叶子节点
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<String>,
}

impl PathNode {
    pub fn branch(
        title: impl Into<String>,
        role: NodeRole,
        explanation: impl Into<String>,
        children: Vec<PathNode>,
    ) -> Self {
        Self {
            title: title.into(),
            role,
            explanation: explanation.into(),
            children,
            task: None,
            quiz: None,
        }
    }

    pub fn leaf(
        title: impl Into<String>,
        explanation: impl Into<String>,
        task: impl Into<String>,
        quiz: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            role: NodeRole::Leaf,
            explanation: explanation.into(),
            children: Vec::new(),
            task: Some(task.into()),
            quiz: Some(quiz.into()),
        }
    }

    /// 以当前节点为根的节点总数
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(PathNode::node_count).sum::<usize>()
    }

    /// 以当前节点为根的深度（单个节点深度为1）
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(PathNode::depth).max().unwrap_or(0)
    }
}

/// 对话助手的开场信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChatbotGreeting {
    pub message: String,
    #[serde(default)]
    pub actions: Vec<String>,
}

/// 树形学习路径
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PathTree {
    pub tree: PathNode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chatbot: Option<ChatbotGreeting>,
}

/// 带领域元数据的树形结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeResult {
    #[serde(flatten)]
    pub path: PathTree,
    pub detected_domain: Option<String>,
    pub confidence: f64,
}

/// 把静态图包装成的模块
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatModule {
    pub title: String,
    pub max_level: u32,
    pub nodes: Vec<FlatNode>,
    pub edges: Vec<FlatEdge>,
}

/// 旧版扁平图结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatGraphResult {
    pub domain: String,
    pub confidence: f64,
    pub modules: Vec<FlatModule>,
    pub algorithms: Vec<String>,
    pub ai_suggestions: Vec<String>,
}

/// 结构化的错误结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
    pub kind: ErrorKind,
}

impl From<&LearnPathError> for ErrorResult {
    fn from(err: &LearnPathError) -> Self {
        Self {
            error: err.to_string(),
            kind: err.kind(),
        }
    }
}

impl From<LearnPathError> for ErrorResult {
    fn from(err: LearnPathError) -> Self {
        Self::from(&err)
    }
}

/// `/generate_path` 的结果，调用方按 `result` 标签分支
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum PathResult {
    Tree(TreeResult),
    FlatGraph(FlatGraphResult),
    Error(ErrorResult),
}

impl PathResult {
    pub fn is_error(&self) -> bool {
        matches!(self, PathResult::Error(_))
    }
}

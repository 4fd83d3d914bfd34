pub mod corpus;
pub mod knowledge_graph;
pub mod level;
pub mod path;

pub use corpus::{DomainCorpus, DomainEntry};
pub use knowledge_graph::{DomainGraph, FlatEdge, FlatNode, KnowledgeGraph};
pub use level::Level;
pub use path::{
    ChatbotGreeting, ErrorResult, FlatGraphResult, FlatModule, NodeRole, PathNode, PathResult,
    PathTree, TreeResult,
};

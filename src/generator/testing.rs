use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::LearnPathError;
use crate::llm::{GenerativeBackend, ResponseFormat};

/// 按脚本依次返回结果的生成后端，记录每次调用
#[derive(Default)]
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Result<String, LearnPathError>>>,
    calls: Mutex<Vec<(String, String, ResponseFormat)>>,
}

impl ScriptedBackend {
    pub fn new(replies: Vec<Result<String, LearnPathError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    pub fn failing(err: LearnPathError) -> Self {
        Self::new(vec![Err(err)])
    }

    pub fn calls(&self) -> Vec<(String, String, ResponseFormat)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeBackend for ScriptedBackend {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        format: ResponseFormat,
    ) -> Result<String, LearnPathError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), prompt.to_string(), format));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LearnPathError::Upstream("script exhausted".to_string())))
    }
}

/// 一棵合法的12节点学习路径JSON
pub const VALID_TREE_JSON: &str = r#"{
  "tree": {
    "title": "Rust",
    "role": "root",
    "explanation": "Systems programming with Rust.",
    "children": [
      {
        "title": "Basics",
        "role": "parent",
        "explanation": "Syntax and tooling.",
        "children": [
          {"title": "Cargo", "role": "leaf", "explanation": "Build tool.", "task": "cargo new", "quiz": "What is a crate?"},
          {"title": "Variables", "role": "leaf", "explanation": "let and mut.", "task": "Shadow a variable", "quiz": "Why immutable?"},
          {"title": "Functions", "role": "leaf", "explanation": "fn items.", "task": "Write fib", "quiz": "What is an expression?"}
        ]
      },
      {
        "title": "Ownership",
        "role": "parent",
        "explanation": "Moves and borrows.",
        "children": [
          {"title": "Moves", "role": "leaf", "explanation": "Transfer.", "task": "Move a String", "quiz": "What is Copy?"},
          {"title": "Borrowing", "role": "leaf", "explanation": "References.", "task": "Borrow mutably", "quiz": "How many &mut?"},
          {"title": "Lifetimes", "role": "leaf", "explanation": "Scopes.", "task": "Annotate a fn", "quiz": "What is 'static?"}
        ]
      },
      {
        "title": "Concurrency",
        "role": "parent",
        "explanation": "Threads and async.",
        "children": [
          {"title": "Threads", "role": "leaf", "explanation": "std::thread.", "task": "Spawn two threads", "quiz": "What is Send?"},
          {"title": "Async", "role": "leaf", "explanation": "Futures.", "task": "Write an async fn", "quiz": "What polls a future?"}
        ]
      }
    ]
  },
  "chatbot": {"message": "Welcome to Rust!", "actions": ["Start"]}
}"#;

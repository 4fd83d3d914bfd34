//! 离线替身：远端不可用时给出确定性的学习路径与辅导回复

use crate::types::{ChatbotGreeting, Level, NodeRole, PathNode, PathTree};

/// 不依赖任何外部服务的确定性替身
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackSubstitute;

impl FallbackSubstitute {
    /// 按固定模板生成学习路径，`level` 不影响结构
    pub fn build_path(&self, topic: &str, _level: Level) -> PathTree {
        let foundations = PathNode::branch(
            format!("Foundations of {}", topic),
            NodeRole::Parent,
            "Core principles and basic building blocks.",
            vec![
                PathNode::leaf(
                    format!("Intro to {}", topic),
                    "Basic overview.",
                    "Write a summary",
                    "Define it.",
                ),
                PathNode::leaf(
                    "Basic syntax",
                    "Grammar and usage.",
                    "Print 'Hello'",
                    "What's the syntax?",
                ),
                PathNode::leaf(
                    "Environment setup",
                    "Tools and IDEs.",
                    "Install tools",
                    "Which IDE?",
                ),
            ],
        );

        let intermediate = PathNode::branch(
            format!("Intermediate {} Concepts", topic),
            NodeRole::Parent,
            "Moving beyond basics into practical logic.",
            vec![
                PathNode::leaf(
                    "Data structures",
                    "Organizing data.",
                    "Create a list",
                    "Name one structure.",
                ),
                PathNode::leaf(
                    "Control flow",
                    "Logic and loops.",
                    "Write a loop",
                    "What is 'if'?",
                ),
                PathNode::leaf(
                    "Functions",
                    "Reusable code.",
                    "Define a function",
                    "How do you call it?",
                ),
            ],
        );

        let advanced = PathNode::branch(
            format!("Advanced {} Mastery", topic),
            NodeRole::Parent,
            "Professional level optimization and patterns.",
            vec![
                PathNode::leaf(
                    "Optimization",
                    "Making it fast.",
                    "Refactor code",
                    "What is Big O?",
                ),
                PathNode::leaf(
                    "Architecture",
                    "Large scale design.",
                    "Draw a diagram",
                    "Name a pattern.",
                ),
            ],
        );

        let tree = PathNode::branch(
            title_case(topic),
            NodeRole::Root,
            format!(
                "Mastering {} from foundational concepts to advanced techniques.",
                topic
            ),
            vec![foundations, intermediate, advanced],
        );

        let chatbot = ChatbotGreeting {
            message: format!(
                "[Mock Mode] Welcome to your complete {} roadmap! I've laid out {} nodes for you to explore.",
                topic,
                tree.node_count()
            ),
            actions: vec![
                "Start with first node".to_string(),
                "Show path overview".to_string(),
                "Explain goal".to_string(),
            ],
        };

        PathTree {
            tree,
            chatbot: Some(chatbot),
        }
    }

    /// 模板化的辅导回复，原样包含提问和当前节点
    pub fn tutor_reply(&self, query: &str, node_context: &str) -> String {
        format!(
            "[Mock Mode] I understand you're asking about '{}' in the context of '{}'. Unfortunately, my brain is taking a break due to quota limits, but you can keep exploring the nodes!",
            query, node_context
        )
    }
}

/// 单词首字母大写，其余小写；非字母字符视为单词边界
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_cased = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_cased = true;
        } else {
            out.push(c);
            prev_cased = false;
        }
    }
    out
}

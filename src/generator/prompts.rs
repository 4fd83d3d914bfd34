//! 学习路径、补充建议与辅导问答的提示词模板

use crate::types::{Level, PathTree};

/// 生成树允许的节点数量范围
pub const MIN_TREE_NODES: usize = 10;
pub const MAX_TREE_NODES: usize = 12;
/// 生成树的最小深度（根节点计为第1层）
pub const MIN_TREE_DEPTH: usize = 3;

/// 钻取上下文的默认值，表示从整棵树开始
pub const ROOT_SELECTION: &str = "root";

/// 期望输出结构的JSON Schema，嵌入到提示词中约束模型
fn path_tree_schema() -> String {
    let schema = schemars::schema_for!(PathTree);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

/// 完整学习路径提示词
pub fn full_path_prompt(topic: &str, level: Level, selected_node: Option<&str>) -> String {
    let focus = match selected_node.map(str::trim) {
        Some(node) if !node.is_empty() && node != ROOT_SELECTION => format!(
            "\nThe learner is drilling down into the node \"{}\". Center the tree on that node: make it the root and expand it into finer-grained subtopics.\n",
            node
        ),
        _ => String::new(),
    };

    format!(
        r#"Design a complete learning path for the topic "{topic}".

Learner level: {level}. {guidance}
{focus}
Structure rules:
- Return a single tree with between {min_nodes} and {max_nodes} nodes in total, counting the root.
- The tree must be at least {min_depth} levels deep: root -> parent modules -> leaf subtopics.
- Exactly one node has role "root". Module nodes have role "parent" and at least one child.
- Every node with role "leaf" has no children, a concrete hands-on "task" and a short "quiz" question.
- Every node has a one or two sentence "explanation".
- Add a "chatbot" greeting with a short welcome "message" and two or three suggested "actions".

Respond with JSON only, no prose and no Markdown fences, matching this JSON Schema:
{schema}
"#,
        topic = topic,
        level = level,
        guidance = level.prompt_guidance(),
        focus = focus,
        min_nodes = MIN_TREE_NODES,
        max_nodes = MAX_TREE_NODES,
        min_depth = MIN_TREE_DEPTH,
        schema = path_tree_schema(),
    )
}

/// 补充子主题提示词
pub fn enrich_prompt(domain: &str, goal: &str, current_node_ids: &[String]) -> String {
    format!(
        r#"Domain: {domain}
User Goal: {goal}
Current Topics: {topics}

Suggest 3-5 additional, relevant subtopics or niche libraries that would complement this learning path.
Return ONLY a JSON array of strings. Example: ["advanced_topic_1", "niche_library_2"]
"#,
        domain = domain,
        goal = goal,
        topics = current_node_ids.join(", "),
    )
}

/// 辅导问答提示词
pub fn tutor_prompt(query: &str, topic: &str, level: Level, node_context: &str) -> String {
    format!(
        r#"You are tutoring a {level} learner who is studying "{topic}".
They are currently looking at the node "{node_context}" of their learning path.

Question: {query}

Answer in plain text, in at most three short paragraphs. Stay within the scope of the current node, and end with one suggestion for what to try next.
"#,
        level = level,
        topic = topic,
        node_context = node_context,
        query = query,
    )
}

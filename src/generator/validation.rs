use crate::error::LearnPathError;
use crate::generator::prompts::{MAX_TREE_NODES, MIN_TREE_DEPTH, MIN_TREE_NODES};
use crate::types::{NodeRole, PathNode};

/// 校验通过的树的统计信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    pub node_count: usize,
    pub depth: usize,
    pub leaf_count: usize,
}

/// 校验学习路径树的结构，返回第一个违规项
pub fn validate_tree(root: &PathNode) -> Result<TreeStats, LearnPathError> {
    if root.role != NodeRole::Root {
        return Err(malformed(format!(
            "top node \"{}\" has role {:?}, expected root",
            root.title, root.role
        )));
    }

    let mut leaf_count = 0;
    check_node(root, true, &mut leaf_count)?;

    let node_count = root.node_count();
    if !(MIN_TREE_NODES..=MAX_TREE_NODES).contains(&node_count) {
        return Err(malformed(format!(
            "tree has {} nodes, expected {} to {}",
            node_count, MIN_TREE_NODES, MAX_TREE_NODES
        )));
    }

    let depth = root.depth();
    if depth < MIN_TREE_DEPTH {
        return Err(malformed(format!(
            "tree depth is {}, expected at least {}",
            depth, MIN_TREE_DEPTH
        )));
    }

    Ok(TreeStats {
        node_count,
        depth,
        leaf_count,
    })
}

fn check_node(node: &PathNode, is_top: bool, leaf_count: &mut usize) -> Result<(), LearnPathError> {
    match node.role {
        NodeRole::Root if !is_top => {
            return Err(malformed(format!(
                "nested node \"{}\" has role root",
                node.title
            )));
        }
        NodeRole::Root | NodeRole::Parent => {
            if node.children.is_empty() {
                return Err(malformed(format!(
                    "{:?} node \"{}\" has no children",
                    node.role, node.title
                )));
            }
        }
        NodeRole::Leaf => {
            if !node.children.is_empty() {
                return Err(malformed(format!(
                    "leaf \"{}\" has {} children",
                    node.title,
                    node.children.len()
                )));
            }
            if is_blank(&node.task) {
                return Err(malformed(format!("leaf \"{}\" has no task", node.title)));
            }
            if is_blank(&node.quiz) {
                return Err(malformed(format!("leaf \"{}\" has no quiz", node.title)));
            }
            *leaf_count += 1;
        }
    }

    for child in &node.children {
        check_node(child, false, leaf_count)?;
    }
    Ok(())
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

fn malformed(reason: String) -> LearnPathError {
    LearnPathError::MalformedResponse(format!("invalid path tree: {}", reason))
}

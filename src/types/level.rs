use serde::{Deserialize, Serialize};

/// 学习者的熟练程度
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    #[serde(rename = "beginner")]
    #[default]
    Beginner,
    #[serde(rename = "intermediate")]
    Intermediate,
    #[serde(rename = "advanced")]
    Advanced,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Beginner => write!(f, "beginner"),
            Level::Intermediate => write!(f, "intermediate"),
            Level::Advanced => write!(f, "advanced"),
        }
    }
}

impl std::str::FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            _ => Err(format!("Unknown level: {}", s)),
        }
    }
}

impl Level {
    /// 静态知识图谱中允许出现的最大节点层级
    pub fn max_graph_depth(&self) -> u32 {
        match self {
            Level::Beginner => 3,
            Level::Intermediate => 4,
            Level::Advanced => 5,
        }
    }

    /// 给生成服务的难度说明
    pub fn prompt_guidance(&self) -> &'static str {
        match self {
            Level::Beginner => {
                "Assume no prior knowledge. Favour intuition, plain language and small hands-on exercises."
            }
            Level::Intermediate => {
                "Assume the fundamentals are known. Focus on practical patterns, tooling and real projects."
            }
            Level::Advanced => {
                "Assume solid working experience. Focus on internals, performance, architecture and trade-offs."
            }
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::generator::prompts::ROOT_SELECTION;
use crate::server::error::ApiError;
use crate::types::Level;

fn default_level() -> String {
    Level::default().to_string()
}

fn default_node() -> String {
    ROOT_SELECTION.to_string()
}

/// 解析请求中的熟练程度，未知取值按请求错误处理
pub fn parse_level(raw: &str) -> Result<Level, ApiError> {
    raw.parse::<Level>().map_err(ApiError::InvalidRequest)
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratePathRequest {
    pub text: String,
    #[serde(default = "default_level")]
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessRequest {
    pub topic: String,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_node")]
    pub selected_node: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub topic: String,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_node")]
    pub node_context: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

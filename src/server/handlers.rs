use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::generator::AppContext;
use crate::server::dto::{
    ChatRequest, ChatResponse, GeneratePathRequest, HealthResponse, ProcessRequest, parse_level,
};
use crate::server::error::ApiError;
use crate::types::PathTree;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn generate_path(
    State(context): State<Arc<AppContext>>,
    Json(body): Json<GeneratePathRequest>,
) -> Result<Response, ApiError> {
    let level = parse_level(&body.level)?;
    tracing::info!("📝 生成学习路径: \"{}\" ({})", body.text, level);

    let result = context.orchestrator.generate_path(&body.text, level).await;
    let status = if result.is_error() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };
    Ok((status, Json(result)).into_response())
}

pub async fn process(
    State(context): State<Arc<AppContext>>,
    Json(body): Json<ProcessRequest>,
) -> Result<Json<PathTree>, ApiError> {
    let level = parse_level(&body.level)?;
    tracing::info!(
        "📝 处理学习路径请求: \"{}\" ({}, 节点 {})",
        body.topic,
        level,
        body.selected_node
    );

    let path = context
        .orchestrator
        .process(&body.topic, level, &body.selected_node)
        .await?;
    Ok(Json(path))
}

pub async fn chat(
    State(context): State<Arc<AppContext>>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let level = parse_level(&body.level)?;
    tracing::info!("💬 辅导问答: {} ({})", body.topic, body.node_context);

    let response = context
        .orchestrator
        .chat(&body.message, &body.topic, level, &body.node_context)
        .await?;
    Ok(Json(ChatResponse { response }))
}

//! HTTP接口：/health、/generate_path、/process、/chat

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::generator::AppContext;

pub mod dto;
pub mod error;
pub mod handlers;

/// 构建路由，上下文作为共享状态
pub fn router(context: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/generate_path", post(handlers::generate_path))
        .route("/process", post(handlers::process))
        .route("/chat", post(handlers::chat))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(context)
}

/// 在给定监听器上运行服务直到退出
pub async fn serve(listener: TcpListener, context: Arc<AppContext>) -> Result<()> {
    let local_addr = listener.local_addr()?;
    tracing::info!("🚀 服务已启动: http://{}", local_addr);
    tracing::info!("   健康检查: curl http://{}/health", local_addr);

    axum::serve(listener, router(context)).await?;
    Ok(())
}

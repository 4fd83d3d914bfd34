use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use learnpath_rs::cli::Args;
use learnpath_rs::generator::AppContext;
use learnpath_rs::llm::LLMClient;
use learnpath_rs::server;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let args = Args::parse();
    let check_connection = args.check_connection;
    let config = args.into_config()?;

    // 日志级别取自合并后的配置（命令行与配置文件）
    let default_level = config.default_log_level();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer())
        .init();
    tracing::info!("⚙️ 使用 {} 提供的生成服务", config.llm.provider);

    if check_connection {
        LLMClient::new(config.llm.clone())?.check_connection().await?;
    }

    let bind_address = config.bind_address();
    let context = Arc::new(AppContext::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("无法监听 {}", bind_address))?;
    server::serve(listener, context).await
}

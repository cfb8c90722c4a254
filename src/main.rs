mod api;
mod core;
mod error;
mod infra;
mod models;

use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::core::gateway::ChatGateway;
use crate::infra::config::AppConfig;
use crate::infra::gemini::GeminiClient;

pub mod ax_state {
    use super::*;
    pub struct AppState {
        pub gateway: ChatGateway,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    if config.api_key.is_empty() {
        // 不阻止启动，首次请求时由上游报错
        tracing::warn!("未设置 API_KEY，/chat 请求将会失败");
    }

    let client = GeminiClient::from_config(&config);
    let state = Arc::new(ax_state::AppState {
        gateway: ChatGateway::new(Arc::new(client), config.model.clone()),
    });

    let app = api::router(state);

    info!("🚀 Women's Support Assistant 运行在 http://{} (model: {})", config.bind_addr, config.model);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

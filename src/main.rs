use anyhow::Context;
use log::info;
use pagegrade::{router, utils, AppConfig, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    utils::init_logging();

    if config.pagespeed_api_key.is_some() {
        info!("PageSpeed API key configured");
    } else {
        info!("No PageSpeed API key, speed analysis will use basic timing");
    }

    let bind_addr = config.bind_addr.clone();
    let shared_state = Arc::new(AppState::from_config(config));
    let app = router(shared_state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    info!("🚀 Server running on http://{}", bind_addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

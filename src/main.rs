use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use videogen::app;
use videogen::config::settings::AppConfig;
use videogen::infrastructure::provider::GeminiVideoProvider;
use videogen::modules::generation::poller::TokioSleeper;
use videogen::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting server...");

    let config = AppConfig::new().map_err(|e| {
        error!("API_KEY must be set to reach the video provider");
        anyhow::anyhow!("Invalid configuration: {}", e)
    })?;

    let provider = GeminiVideoProvider::new(
        &config.provider_base_url,
        &config.provider_model,
        &config.api_key,
        config.provider_timeout(),
    )
    .context("Failed to create provider client")?;

    let port = config.server_port;
    let state = AppState::new(config, Arc::new(provider), Arc::new(TokioSleeper));
    let app = app::create_app(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

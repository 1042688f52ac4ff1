use anyhow::Context;
use nano_banana::{router, AppState, Config, GeminiPromptGenerator, SystemClipboard};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("nano_banana=info,tower_http=info")),
        )
        .init();

    let config = Config::load();
    if !config.is_configured() {
        warn!("GEMINI_API_KEY is not set; prompt requests will fail until it is configured");
    }

    let bind = config.bind;
    let model = config.model.clone();
    let state = AppState::new(
        Arc::new(GeminiPromptGenerator::new(config)),
        Arc::new(SystemClipboard),
    );

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;

    info!(%model, "server running on http://{bind}");
    info!("open it in your browser to start generating prompts");

    axum::serve(listener, router(state))
        .await
        .context("server error")?;
    Ok(())
}

use anyhow::{Context, Result};
use folio::Config;
use folio_server::{app, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    info!("folio starting...");

    let config = Config::load_default().context("Failed to load config")?;
    info!(
        "Port: {}, API: {}, Storage: {}",
        config.server.port, config.api.base_url, config.storage.backend
    );

    let state = AppState::from_config(&config).await?;
    let app = app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

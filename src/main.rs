//! Main entry point for the outfit generation gateway

use outfit_gateway::{api, config::Settings, AppState};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .init();

    info!("Starting outfit generation gateway");

    // Load configuration
    let settings = Settings::load()?;
    settings.validate()?;
    info!(
        "Loaded configuration: server={}:{}",
        settings.server.host, settings.server.port
    );

    if settings.backend.api_key.is_none() {
        warn!("Backend API key is not configured; generation requests will fail fast");
    }

    // Create application state
    let app_state = Arc::new(AppState::new(settings.clone())?);

    // Build the router
    let app = api::routes::create_router(app_state);

    // Get server address
    let addr = format!("{}:{}", settings.server.host, settings.server.port);

    info!("Server listening on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// src/main.rs
use dotenv::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use user_validation_api::app;
use user_validation_api::common::{AppState, ServerConfig};

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let config = ServerConfig::from_env()?;
    info!(
        cors_origins = config.cors_origins.len(),
        log_bodies = config.log_bodies,
        "Configuration loaded"
    );

    // ========================================================================
    // APPLICATION STATE
    // ========================================================================

    let validators = app::build_validators();
    info!(count = validators.len(), "Validators registered");

    let state = Arc::new(AppState::new(validators));

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let app = app::build_app(state, &config);

    let addr = config.socket_addr();
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

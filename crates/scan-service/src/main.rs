//! Scan Upload & Analysis Service
//!
//! REST API for scan image uploads and mock oral health analysis

use anyhow::{Context, Result};
use scan_service::{create_router, AppState, Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scan_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .ensure_directories()
        .context("Failed to prepare upload directory")?;

    info!("Starting Scan Service");
    info!("Upload directory: {}", config.upload_dir.display());
    info!("Listening on {}", config.api_address());

    let addr = config.api_address();

    // Create application state and router
    let state = AppState::new(config);
    let app = create_router(state);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    info!("Scan Service running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}

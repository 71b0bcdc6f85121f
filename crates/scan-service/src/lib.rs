//! Scan Upload & Analysis Service
//!
//! HTTP API for the ArogyaSmile oral health companion. Accepts multipart
//! image uploads, stores them, and returns an analysis of the first image.
//! Analysis currently comes from a canned mock; the real inference backend
//! plugs in behind the [`Analyzer`] trait without changing the HTTP
//! contract.
//!
//! ## Endpoints
//!
//! - `POST /api/scan/upload` - Upload 1-5 images plus a language tag
//! - `GET /api/scan/history` - List past scans (mock data)
//! - `GET /api/ping` - Configured ping message
//! - `GET /uploads/{filename}` - Raw bytes of a stored upload
//! - `GET /health` - Health check

pub mod analyzer;
pub mod config;
pub mod handlers;
pub mod models;
pub mod storage;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub use analyzer::{Analyzer, MockAnalyzer};
pub use config::Config;
pub use storage::UploadStore;

/// Whole-request body ceiling: five images at the per-file limit plus
/// form overhead
const MAX_BODY_BYTES: usize = 52 * 1024 * 1024;

/// Application state shared across handlers
pub struct AppState {
    /// Service configuration
    pub config: Config,

    /// Filesystem store for uploaded images
    pub store: UploadStore,

    /// Analysis backend
    pub analyzer: Arc<dyn Analyzer>,
}

impl AppState {
    /// Create application state with the mock analyzer
    pub fn new(config: Config) -> Self {
        let store = UploadStore::new(config.upload_dir.clone());
        Self {
            config,
            store,
            analyzer: Arc::new(MockAnalyzer::new()),
        }
    }

    /// Create application state with a specific analyzer
    pub fn with_analyzer(config: Config, analyzer: Arc<dyn Analyzer>) -> Self {
        let store = UploadStore::new(config.upload_dir.clone());
        Self {
            config,
            store,
            analyzer,
        }
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let uploads = ServeDir::new(state.store.upload_dir());
    let state = Arc::new(state);

    Router::new()
        // Health check
        .route("/health", get(handlers::health_handler))
        .route("/api/ping", get(handlers::ping_handler))
        // Scan upload and history
        .route("/api/scan/upload", post(handlers::upload_scan_handler))
        .route("/api/scan/history", get(handlers::scan_history_handler))
        // Stored uploads, served back as static files
        .nest_service("/uploads", uploads)
        // Middleware
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

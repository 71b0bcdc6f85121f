//! API request handlers for the scan service

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{error, info};

use crate::models::{HistoryResponse, PingResponse, UploadResponse};
use crate::storage::{is_allowed_image, MAX_IMAGES_PER_SCAN, MAX_IMAGE_BYTES};
use crate::AppState;
use arogya_common::{Error, ScanSummary, Severity};
use arogya_i18n::LanguageCode;

/// Multipart field carrying image parts
const IMAGES_FIELD: &str = "images";

/// Multipart field carrying the language tag
const LANGUAGE_FIELD: &str = "language";

/// API Error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.message
        });

        (self.status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        if err.is_client_error() {
            ApiError {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            }
        } else {
            // Never leak internals to the caller; the cause is logged at
            // the failure site.
            ApiError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Analysis failed".to_string(),
            }
        }
    }
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "scan-service"
    }))
}

/// Ping endpoint; the message comes from configuration
pub async fn ping_handler(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    Json(PingResponse {
        message: state.config.ping_message.clone(),
    })
}

/// Upload 1-5 scan images and receive an analysis of the first one
///
/// Every part is validated (count cap, extension AND declared MIME type,
/// size ceiling) before anything is written; a failing part rejects the
/// whole request. All accepted images are stored; only the first feeds the
/// analyzer under the current mock contract.
pub async fn upload_scan_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut language = LanguageCode::default().code().to_string();
    let mut images: Vec<(String, Vec<u8>)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::MalformedUpload(e.to_string()))?
    {
        match field.name() {
            Some(LANGUAGE_FIELD) => {
                language = field
                    .text()
                    .await
                    .map_err(|e| Error::MalformedUpload(e.to_string()))?;
            }
            Some(IMAGES_FIELD) => {
                // Reject before reading the over-limit part's body
                if images.len() >= MAX_IMAGES_PER_SCAN {
                    return Err(Error::TooManyImages(MAX_IMAGES_PER_SCAN).into());
                }

                let filename = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();

                if !is_allowed_image(&filename, &content_type) {
                    info!("Rejecting upload part {} ({})", filename, content_type);
                    return Err(Error::UnsupportedImage(filename).into());
                }

                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| Error::MalformedUpload(e.to_string()))?;

                if bytes.len() > MAX_IMAGE_BYTES {
                    return Err(Error::ImageTooLarge {
                        filename,
                        limit: MAX_IMAGE_BYTES,
                    }
                    .into());
                }

                images.push((filename, bytes.to_vec()));
            }
            _ => {}
        }
    }

    if images.is_empty() {
        return Err(Error::NoImages.into());
    }

    info!("Storing {} scan image(s), language {}", images.len(), language);

    // All accepted images are stored; only the first is analyzed
    let mut stored = Vec::with_capacity(images.len());
    for (filename, bytes) in &images {
        let image = state.store.save(filename, bytes).map_err(|e| {
            error!("Failed to store upload {}: {}", filename, e);
            ApiError::from(e)
        })?;
        stored.push(image);
    }

    let first = &stored[0];
    let analysis = state
        .analyzer
        .analyze(&first.url, &language)
        .await
        .map_err(|e| {
            error!("Analysis failed for {}: {}", first.url, e);
            ApiError::from(e)
        })?;

    info!("Scan {} analyzed as {:?}", analysis.scan_id, analysis.severity);

    Ok(Json(UploadResponse {
        success: true,
        data: analysis,
    }))
}

/// List past scans
///
/// Mock data until per-user storage exists: two canned entries with
/// timestamps relative to the time of the call.
pub async fn scan_history_handler() -> Json<HistoryResponse> {
    let now = Utc::now();

    let history = vec![
        ScanSummary {
            scan_id: "scan_1".to_string(),
            timestamp: now - Duration::days(7),
            severity: Severity::Mild,
            summary: "Plaque detected".to_string(),
        },
        ScanSummary {
            scan_id: "scan_2".to_string(),
            timestamp: now - Duration::days(14),
            severity: Severity::Normal,
            summary: "No issues detected".to_string(),
        },
    ];

    Json(HistoryResponse {
        success: true,
        data: history,
    })
}

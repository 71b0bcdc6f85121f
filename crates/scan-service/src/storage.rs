//! Upload storage and validation
//!
//! Accepted images are written under a single upload directory with
//! timestamped filenames of the form `<epoch-millis>-<original-name>` and
//! served back from `/uploads/<filename>`. The directory is append-only:
//! every write goes to a fresh path, so concurrent requests need no
//! coordination. Two uploads of the same filename within one millisecond
//! would collide; accepted risk at this scale.

use anyhow::Context;
use arogya_common::{Error, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Per-file size ceiling (10 MiB)
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Maximum image parts accepted per scan request
pub const MAX_IMAGES_PER_SCAN: usize = 5;

/// Raster formats the analyzer accepts. A part's file extension and its
/// declared MIME type must BOTH match one of these.
const ALLOWED_IMAGE_TOKENS: &[&str] = &["jpeg", "jpg", "png", "gif"];

/// Whether `filename` + `content_type` pass both allow-list checks.
pub fn is_allowed_image(filename: &str, content_type: &str) -> bool {
    let extension_ok = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_IMAGE_TOKENS.contains(&ext.as_str())
        })
        .unwrap_or(false);

    let content_type = content_type.to_ascii_lowercase();
    let mime_ok = ALLOWED_IMAGE_TOKENS
        .iter()
        .any(|token| content_type.contains(token));

    extension_ok && mime_ok
}

/// A stored upload
#[derive(Debug, Clone)]
pub struct StoredImage {
    /// Filename within the upload directory
    pub filename: String,

    /// Public read path, e.g. `/uploads/<filename>`
    pub url: String,
}

/// Filesystem store for uploaded images
#[derive(Debug, Clone)]
pub struct UploadStore {
    upload_dir: PathBuf,
}

impl UploadStore {
    pub fn new(upload_dir: PathBuf) -> Self {
        Self { upload_dir }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Write one accepted image to the upload directory.
    ///
    /// The stored name is `<epoch-millis>-<original-name>`, with the
    /// original name reduced to its final path component.
    pub fn save(&self, original_name: &str, bytes: &[u8]) -> Result<StoredImage> {
        let base_name = Path::new(original_name)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload");

        let filename = format!("{}-{}", Utc::now().timestamp_millis(), base_name);
        let path = self.upload_dir.join(&filename);

        std::fs::write(&path, bytes)
            .with_context(|| format!("Failed to write upload: {}", path.display()))
            .map_err(Error::Other)?;

        debug!("Stored upload {} ({} bytes)", filename, bytes.len());

        Ok(StoredImage {
            url: format!("/uploads/{}", filename),
            filename,
        })
    }
}

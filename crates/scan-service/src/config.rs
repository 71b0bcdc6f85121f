//! Configuration management for the scan service
//!
//! Loads configuration from environment variables with sensible defaults.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API server host
    pub host: String,

    /// API server port
    pub port: u16,

    /// Directory where uploaded images are stored and served back from
    pub upload_dir: PathBuf,

    /// Message returned by the ping endpoint
    pub ping_message: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("SCAN_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: env::var("SCAN_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid SCAN_PORT")?,

            upload_dir: env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "./uploads".to_string())
                .into(),

            ping_message: env::var("PING_MESSAGE").unwrap_or_else(|_| "ping".to_string()),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("SCAN_PORT must be greater than 0");
        }

        Ok(())
    }

    /// Get the API server address
    pub fn api_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Ensure the upload directory exists
    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.upload_dir).with_context(|| {
            format!(
                "Failed to create upload directory: {}",
                self.upload_dir.display()
            )
        })?;

        Ok(())
    }
}

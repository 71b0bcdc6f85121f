//! Shared scan data model
//!
//! These types are the wire contract between the scan service and its
//! clients, and the shape of entries persisted in the client-local scan
//! history. Field names follow the published JSON contract (camelCase).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of an oral health finding, ordered from least to most serious
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Normal,
    Mild,
    Moderate,
    Severe,
}

/// A single condition detected in a scanned image
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedCondition {
    /// Condition class name, e.g. "cavity" or "plaque"
    #[serde(rename = "class")]
    pub class_name: String,

    /// Model confidence in [0, 1]
    pub confidence: f64,

    /// Tooth region the condition was localized to, e.g. "Molar-L2"
    pub tooth_region: String,
}

/// Full analysis produced for one uploaded scan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Identifier of the form `scan_<epoch-millis>`
    pub scan_id: String,

    /// When the analysis was produced
    pub timestamp: DateTime<Utc>,

    /// Read path of the stored image, e.g. `/uploads/<filename>`
    pub image_url: String,

    /// Detected conditions, highest confidence first
    pub labels: Vec<DetectedCondition>,

    /// Human-readable one-line summary
    pub summary: String,

    /// Overall severity classification
    pub severity: Severity,

    /// Heatmap overlays as data URIs
    pub heatmaps: Vec<String>,

    /// Care recommendations, at most five
    pub recommendations: Vec<String>,

    /// Nutritional deficiency tags, de-duplicated
    pub deficiencies: Vec<String>,

    /// Suggested follow-up actions
    pub next_steps: Vec<String>,

    /// Language tag the result should be rendered in
    pub language: String,
}

/// Compact projection of a past scan, used by history listings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    pub scan_id: String,
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub summary: String,
}

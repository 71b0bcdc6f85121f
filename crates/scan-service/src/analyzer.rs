//! Analysis capability
//!
//! The endpoint talks to a pluggable [`Analyzer`] so the canned
//! [`MockAnalyzer`] can later be swapped for a client of a real inference
//! service without touching the request/response contract. A real
//! implementation must add timeout and retry handling for its downstream
//! call; the mock has none because it cannot fail slow.

use arogya_common::{AnalysisResult, DetectedCondition, Result, Severity};
use async_trait::async_trait;
use chrono::Utc;

/// At most this many recommendations are returned per result
const MAX_RECOMMENDATIONS: usize = 5;

/// 1x1 transparent PNG standing in for a real heatmap overlay
const HEATMAP_PLACEHOLDER: &str =
    "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

/// Produces an [`AnalysisResult`] for a stored scan image
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, image_url: &str, language: &str) -> Result<AnalysisResult>;
}

/// Canned analyzer returning a fixed two-condition result
///
/// Stands in for the future inference backend. The output is deterministic
/// apart from the identifier and timestamp, which makes it suitable for
/// compatibility tests against the response contract.
#[derive(Debug, Clone, Default)]
pub struct MockAnalyzer;

impl MockAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn detections() -> Vec<DetectedCondition> {
        vec![
            DetectedCondition {
                class_name: "cavity".to_string(),
                confidence: 0.85,
                tooth_region: "Molar-L2".to_string(),
            },
            DetectedCondition {
                class_name: "plaque".to_string(),
                confidence: 0.72,
                tooth_region: "Premolar-R1".to_string(),
            },
        ]
    }

    fn recommendations_for(class_name: &str) -> &'static [&'static str] {
        match class_name {
            "cavity" => &[
                "Schedule a filling appointment within 2 weeks",
                "Avoid hot and cold foods",
                "Use a soft-bristled toothbrush",
                "Fluoride toothpaste is recommended",
            ],
            "plaque" => &[
                "Brush twice daily with fluoride toothpaste",
                "Floss daily to remove plaque buildup",
                "Use an electric toothbrush for better cleaning",
                "Consider professional cleaning from dentist",
            ],
            _ => &[],
        }
    }

    fn deficiencies_for(class_name: &str) -> &'static [&'static str] {
        match class_name {
            "cavity" => &["Calcium", "Vitamin D", "Fluoride"],
            "plaque" => &["Vitamin C", "Calcium"],
            _ => &[],
        }
    }

    fn build_result(image_url: &str, language: &str) -> AnalysisResult {
        let labels = Self::detections();

        let recommendations: Vec<String> = labels
            .iter()
            .flat_map(|label| Self::recommendations_for(&label.class_name))
            .take(MAX_RECOMMENDATIONS)
            .map(|s| s.to_string())
            .collect();

        // De-duplicated union, preserving first-seen order
        let mut deficiencies: Vec<String> = Vec::new();
        for label in &labels {
            for deficiency in Self::deficiencies_for(&label.class_name) {
                if !deficiencies.iter().any(|d| d == deficiency) {
                    deficiencies.push(deficiency.to_string());
                }
            }
        }

        let summary = if labels.is_empty() {
            "No significant oral diseases detected.".to_string()
        } else {
            let names: Vec<&str> = labels.iter().map(|l| l.class_name.as_str()).collect();
            format!("Likely {} detected.", names.join(" and "))
        };

        let severity = match labels.first() {
            Some(first) if first.confidence > 0.8 => Severity::Moderate,
            Some(_) => Severity::Mild,
            None => Severity::Normal,
        };

        AnalysisResult {
            scan_id: format!("scan_{}", Utc::now().timestamp_millis()),
            timestamp: Utc::now(),
            image_url: image_url.to_string(),
            labels,
            summary,
            severity,
            heatmaps: vec![HEATMAP_PLACEHOLDER.to_string()],
            recommendations,
            deficiencies,
            next_steps: vec![
                "Schedule dentist appointment within 1-2 weeks".to_string(),
                "Follow the recommendations above".to_string(),
                "Monitor for worsening symptoms".to_string(),
            ],
            language: language.to_string(),
        }
    }
}

#[async_trait]
impl Analyzer for MockAnalyzer {
    async fn analyze(&self, image_url: &str, language: &str) -> Result<AnalysisResult> {
        Ok(Self::build_result(image_url, language))
    }
}

//! Response envelopes for the scan service

use arogya_common::{AnalysisResult, ScanSummary};
use serde::Serialize;

/// Success envelope for an upload-and-analyze request
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,

    /// The analysis produced for the first stored image
    pub data: AnalysisResult,
}

/// Success envelope for the scan history listing
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub success: bool,

    pub data: Vec<ScanSummary>,
}

/// Ping reply
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: String,
}

pub mod error;
pub mod scan;

pub use error::{Error, Result};
pub use scan::{AnalysisResult, DetectedCondition, ScanSummary, Severity};

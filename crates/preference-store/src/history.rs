//! Client-local scan history lists
//!
//! Two JSON-encoded lists live alongside the preferences: the full
//! analysis results of past uploads (newest first, capped) and the compact
//! summaries produced by quick offline scans (newest first, uncapped).
//! A corrupt stored list reads as empty rather than wedging the history
//! screen.

use crate::store::KeyValueStore;
use anyhow::{Context, Result};
use arogya_common::{AnalysisResult, ScanSummary};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Store key holding the full analysis result list
pub const SCAN_HISTORY_KEY: &str = "arogya_scan_history";

/// Store key holding the offline scan summary list
pub const OFFLINE_SCANS_KEY: &str = "arogya_offline_scans";

/// Maximum retained full analysis results
pub const HISTORY_CAP: usize = 20;

fn load_list<T: DeserializeOwned, S: KeyValueStore>(store: &S, key: &str) -> Vec<T> {
    let Some(raw) = store.get(key) else {
        return Vec::new();
    };

    match serde_json::from_str(&raw) {
        Ok(list) => list,
        Err(e) => {
            warn!("Discarding corrupt history list under {}: {}", key, e);
            Vec::new()
        }
    }
}

fn save_list<T: Serialize, S: KeyValueStore>(store: &mut S, key: &str, list: &[T]) -> Result<()> {
    let json = serde_json::to_string(list).context("Failed to serialize history list")?;
    store.set(key, &json)
}

/// Full analysis results of past uploads, newest first, capped at
/// [`HISTORY_CAP`] entries
pub struct ScanHistory;

impl ScanHistory {
    pub fn list<S: KeyValueStore>(store: &S) -> Vec<AnalysisResult> {
        load_list(store, SCAN_HISTORY_KEY)
    }

    /// Prepend `result`; the oldest entries beyond the cap are dropped.
    pub fn push<S: KeyValueStore>(store: &mut S, result: &AnalysisResult) -> Result<()> {
        let mut list = Self::list(store);
        list.insert(0, result.clone());
        list.truncate(HISTORY_CAP);
        save_list(store, SCAN_HISTORY_KEY, &list)
    }

    pub fn clear<S: KeyValueStore>(store: &mut S) -> Result<()> {
        store.remove(SCAN_HISTORY_KEY)
    }
}

/// Summaries of past quick offline scans, newest first
pub struct OfflineScans;

impl OfflineScans {
    pub fn list<S: KeyValueStore>(store: &S) -> Vec<ScanSummary> {
        load_list(store, OFFLINE_SCANS_KEY)
    }

    pub fn push<S: KeyValueStore>(store: &mut S, summary: &ScanSummary) -> Result<()> {
        let mut list = Self::list(store);
        list.insert(0, summary.clone());
        save_list(store, OFFLINE_SCANS_KEY, &list)
    }

    pub fn clear<S: KeyValueStore>(store: &mut S) -> Result<()> {
        store.remove(OFFLINE_SCANS_KEY)
    }
}

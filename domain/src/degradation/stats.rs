//! Read-only introspection snapshot

use crate::util::duration_ms;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Snapshot of the engine's data sources and enabled strategies.
///
/// For dashboards only; never used for control flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegradationStats {
    pub static_entries: usize,
    pub cached_entries: usize,
    #[serde(rename = "cache_ttl_ms", with = "duration_ms")]
    pub cache_ttl: Duration,
    pub enable_cached_results: bool,
    pub enable_fallback_data: bool,
    pub enable_partial_results: bool,
    pub enable_alternative_logic: bool,
}

//! Cache configuration from TOML (`[cache]` section)

use degrade_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw cache configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCacheConfig {
    /// Entries older than this are never returned
    pub ttl_seconds: u64,
    /// Period of the background sweep; 0 disables it (lazy eviction only)
    pub sweep_interval_seconds: u64,
}

impl Default for FileCacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: 60 * 60,
            sweep_interval_seconds: 5 * 60,
        }
    }
}

impl FileCacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }

    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval_seconds > 0).then(|| Duration::from_secs(self.sweep_interval_seconds))
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.ttl_seconds > 0 {
            return Vec::new();
        }
        vec![ConfigIssue::warning(
            ConfigIssueCode::ZeroDuration {
                field: "cache.ttl_seconds".to_string(),
            },
            "cache.ttl_seconds is zero: cached results expire immediately",
        )]
    }
}

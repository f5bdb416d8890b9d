//! Cached primary result

use crate::classification::Classification;
use crate::util::clamp_unit;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A committed primary result held by the result cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedEntry {
    pub classification: Classification,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
    /// Where the entry came from (e.g. "primary")
    pub source: String,
}

impl CachedEntry {
    pub fn new(
        classification: Classification,
        confidence: f64,
        timestamp: DateTime<Utc>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            classification,
            confidence: clamp_unit(confidence),
            timestamp,
            source: source.into(),
        }
    }

    /// Age of the entry at `now`; zero when `now` precedes the timestamp.
    pub fn age_at(&self, now: DateTime<Utc>) -> Duration {
        (now - self.timestamp).to_std().unwrap_or(Duration::ZERO)
    }

    /// An entry is fresh while `now - timestamp <= ttl`.
    pub fn is_fresh_at(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.age_at(now) <= ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn entry(at: DateTime<Utc>) -> CachedEntry {
        CachedEntry::new(
            Classification::new("c", "541511", "Custom Computer Programming Services"),
            0.9,
            at,
            "primary",
        )
    }

    #[test]
    fn test_fresh_until_ttl_inclusive() {
        let t0 = Utc::now();
        let e = entry(t0);
        let ttl = Duration::from_secs(60);
        assert!(e.is_fresh_at(t0 + TimeDelta::seconds(59), ttl));
        assert!(e.is_fresh_at(t0 + TimeDelta::seconds(60), ttl));
        assert!(!e.is_fresh_at(t0 + TimeDelta::seconds(61), ttl));
    }

    #[test]
    fn test_clock_skew_counts_as_fresh() {
        let t0 = Utc::now();
        let e = entry(t0);
        assert!(e.is_fresh_at(t0 - TimeDelta::seconds(5), Duration::from_secs(1)));
    }
}

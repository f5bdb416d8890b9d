//! Cached results strategy

use super::{FallbackHandler, StrategyError, StrategyYield, require_query};
use crate::ports::result_cache::{CacheLookup, ResultCache};
use degrade_domain::{FallbackStrategy, QueryPayload};
use std::sync::Arc;
use tracing::debug;

/// Answers from a previously committed primary result.
///
/// Succeeds only for a fresh entry; the entry's confidence is the data quality.
pub struct CachedResultsHandler {
    cache: Arc<dyn ResultCache>,
}

impl CachedResultsHandler {
    pub fn new(cache: Arc<dyn ResultCache>) -> Self {
        Self { cache }
    }
}

impl FallbackHandler for CachedResultsHandler {
    fn strategy(&self) -> FallbackStrategy {
        FallbackStrategy::CachedResults
    }

    fn attempt(&self, payload: &QueryPayload) -> Result<StrategyYield, StrategyError> {
        let query = require_query(payload)?;

        match self.cache.lookup(query) {
            CacheLookup::Hit(entry) => {
                debug!("Cache hit for '{}' (source: {})", query, entry.source);
                Ok(StrategyYield::new(entry.classification, entry.confidence))
            }
            CacheLookup::Expired { age } => {
                debug!("Cache entry for '{}' expired and was evicted", query);
                Err(StrategyError::expired(age, self.cache.ttl()))
            }
            CacheLookup::Miss => Err(StrategyError::NotFound(format!(
                "no cached result for '{query}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use degrade_domain::{CachedEntry, Classification};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Cache double returning scripted lookups
    struct ScriptedCache {
        entries: Mutex<HashMap<String, CacheLookup>>,
    }

    impl ScriptedCache {
        fn with(query: &str, lookup: CacheLookup) -> Self {
            let mut entries = HashMap::new();
            entries.insert(query.to_string(), lookup);
            Self {
                entries: Mutex::new(entries),
            }
        }
    }

    impl ResultCache for ScriptedCache {
        fn lookup(&self, query: &str) -> CacheLookup {
            self.entries
                .lock()
                .unwrap()
                .remove(query)
                .unwrap_or(CacheLookup::Miss)
        }
        fn insert(&self, _query: &str, _entry: CachedEntry) {}
        fn purge_expired(&self) -> usize {
            0
        }
        fn len(&self) -> usize {
            self.entries.lock().unwrap().len()
        }
        fn ttl(&self) -> Duration {
            Duration::from_secs(3600)
        }
    }

    #[test]
    fn test_hit_uses_entry_confidence() {
        let entry = CachedEntry::new(
            Classification::new("c", "541511", "Custom Computer Programming Services"),
            0.85,
            Utc::now(),
            "primary",
        );
        let handler = CachedResultsHandler::new(Arc::new(ScriptedCache::with(
            "acme software",
            CacheLookup::Hit(entry),
        )));
        let y = handler.attempt(&QueryPayload::text("acme software")).unwrap();
        assert_eq!(y.classification.code, "541511");
        assert!((y.data_quality - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_expired_fails() {
        let handler = CachedResultsHandler::new(Arc::new(ScriptedCache::with(
            "acme",
            CacheLookup::Expired {
                age: Duration::from_secs(7200),
            },
        )));
        let err = handler.attempt(&QueryPayload::text("acme")).unwrap_err();
        assert!(matches!(err, StrategyError::Expired { .. }));
    }

    #[test]
    fn test_miss_and_empty_query() {
        let handler = CachedResultsHandler::new(Arc::new(ScriptedCache::with(
            "other",
            CacheLookup::Miss,
        )));
        assert!(matches!(
            handler.attempt(&QueryPayload::text("acme")),
            Err(StrategyError::NotFound(_))
        ));
        assert_eq!(
            handler.attempt(&QueryPayload::from_fields([("city", "Austin")])),
            Err(StrategyError::EmptyQuery)
        );
    }
}

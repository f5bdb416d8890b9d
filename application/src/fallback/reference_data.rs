//! Static reference data strategy

use super::{FallbackHandler, StrategyError, StrategyYield, require_query};
use crate::ports::reference_store::ReferenceLookup;
use degrade_domain::{FallbackStrategy, QueryPayload};
use std::sync::Arc;
use tracing::debug;

/// Multiplier applied to a stored confidence when only a substring matched.
pub const SUBSTRING_MATCH_PENALTY: f64 = 0.8;

/// Answers from vetted static reference data.
///
/// Exact (case-insensitive) key match first; otherwise the first key, in
/// sorted order, that contains or is contained in the query, at reduced
/// confidence.
pub struct FallbackDataHandler {
    store: Arc<dyn ReferenceLookup>,
}

impl FallbackDataHandler {
    pub fn new(store: Arc<dyn ReferenceLookup>) -> Self {
        Self { store }
    }
}

impl FallbackHandler for FallbackDataHandler {
    fn strategy(&self) -> FallbackStrategy {
        FallbackStrategy::FallbackData
    }

    fn attempt(&self, payload: &QueryPayload) -> Result<StrategyYield, StrategyError> {
        let query = require_query(payload)?.to_lowercase();

        let (entry, quality) = if let Some(entry) = self.store.exact(&query) {
            (entry, entry.confidence)
        } else if let Some(entry) = self.store.containing(&query) {
            debug!("Reference substring match: '{}' ~ '{}'", query, entry.key);
            (entry, entry.confidence * SUBSTRING_MATCH_PENALTY)
        } else {
            return Err(StrategyError::NotFound(format!(
                "no reference data for '{query}'"
            )));
        };

        let classification = entry.classification.instantiate().with_confidence(quality);
        Ok(StrategyYield::new(classification, quality))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use degrade_domain::{Classification, ReferenceEntry};

    /// Minimal store double: linear scan over sorted entries
    struct VecStore(Vec<ReferenceEntry>);

    impl ReferenceLookup for VecStore {
        fn exact(&self, query: &str) -> Option<&ReferenceEntry> {
            self.0.iter().find(|e| e.key == query)
        }
        fn containing(&self, query: &str) -> Option<&ReferenceEntry> {
            self.0
                .iter()
                .find(|e| query.contains(&e.key) || e.key.contains(query))
        }
        fn len(&self) -> usize {
            self.0.len()
        }
    }

    fn handler() -> FallbackDataHandler {
        FallbackDataHandler::new(Arc::new(VecStore(vec![ReferenceEntry::new(
            "retail",
            Classification::new("ref-retail", "44-45", "Retail Trade"),
            0.7,
        )])))
    }

    #[test]
    fn test_exact_match_case_insensitive() {
        let y = handler().attempt(&QueryPayload::text("RETAIL")).unwrap();
        assert!((y.data_quality - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_substring_match_is_penalized() {
        let y = handler()
            .attempt(&QueryPayload::text("best retail shop downtown"))
            .unwrap();
        assert!((y.data_quality - 0.56).abs() < 1e-9);
        assert_eq!(y.classification.code, "44-45");
    }

    #[test]
    fn test_miss() {
        assert!(matches!(
            handler().attempt(&QueryPayload::text("shipyard")),
            Err(StrategyError::NotFound(_))
        ));
    }
}

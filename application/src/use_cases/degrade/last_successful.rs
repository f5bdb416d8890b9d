//! Last successful primary result, owned per orchestrator.

use degrade_domain::Classification;
use std::sync::RwLock;

/// Holds the most recent classification produced by the primary operation.
///
/// Last writer wins. Lock poisoning is recovered since the guarded value is
/// always a complete `Option`.
#[derive(Debug, Default)]
pub struct LastSuccessfulData {
    inner: RwLock<Option<Classification>>,
}

impl LastSuccessfulData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, classification: Classification) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(classification);
    }

    /// A copy of the stored classification.
    pub fn get(&self) -> Option<Classification> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

//! Engine parameters: how the orchestrator wraps the primary operation.
//!
//! [`EngineParams`] groups application-layer concerns of
//! [`DegradationOrchestrator`](crate::use_cases::degrade::DegradationOrchestrator).
//! Strategy selection and thresholds are domain policy and live in
//! [`DegradationPolicy`](degrade_domain::DegradationPolicy).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Primary-operation wrapping parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineParams {
    /// Deadline applied to the primary operation. `None` waits indefinitely.
    pub primary_timeout: Option<Duration>,
    /// Error and panic texts captured into attempts are truncated to this many bytes.
    pub max_error_len: usize,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            primary_timeout: Some(Duration::from_secs(30)),
            max_error_len: 512,
        }
    }
}

impl EngineParams {
    // ==================== Builder Methods ====================

    pub fn with_primary_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.primary_timeout = timeout;
        self
    }

    pub fn with_max_error_len(mut self, max: usize) -> Self {
        self.max_error_len = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = EngineParams::default();
        assert_eq!(params.primary_timeout, Some(Duration::from_secs(30)));
        assert_eq!(params.max_error_len, 512);
    }

    #[test]
    fn test_builder() {
        let params = EngineParams::default()
            .with_primary_timeout(None)
            .with_max_error_len(64);
        assert!(params.primary_timeout.is_none());
        assert_eq!(params.max_error_len, 64);
    }
}

//! Port for structured outcome logging.
//!
//! Defines the [`OutcomeLogger`] trait for recording degradation outcomes to
//! a machine-readable audit log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures every
//! outcome (attempt trail included) for operators and dashboards.

use serde_json::Value;

/// A structured outcome event for logging.
pub struct OutcomeEvent {
    /// Event type identifier (e.g. "primary_success", "degraded", "exhausted").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl OutcomeEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging outcome events to a structured log.
///
/// `log` is synchronous and non-fallible so it can never disturb the
/// degradation path; write failures are dropped.
pub trait OutcomeLogger: Send + Sync {
    fn log(&self, event: OutcomeEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoOutcomeLogger;

impl OutcomeLogger for NoOutcomeLogger {
    fn log(&self, _event: OutcomeEvent) {}
}

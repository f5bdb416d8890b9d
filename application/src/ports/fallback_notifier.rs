//! Fallback progress notification port
//!
//! Defines the interface for reporting progress while the fallback chain runs.

use degrade_domain::{DegradationOutcome, FallbackAttempt, FallbackStrategy};

/// Callback for progress updates during degradation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, progress bars, etc.)
pub trait FallbackNotifier: Send + Sync {
    /// Called when the primary operation failed and the chain is about to run
    fn on_primary_failed(&self, error: &str, strategies: usize);

    /// Called before a strategy is attempted
    fn on_attempt_start(&self, strategy: FallbackStrategy, index: usize);

    /// Called after a strategy attempt has been recorded
    fn on_attempt_complete(&self, attempt: &FallbackAttempt);

    /// Called once with the final outcome
    fn on_outcome(&self, _outcome: &DegradationOutcome) {}
}

/// No-op notifier for when progress reporting is not needed
pub struct NoProgress;

impl FallbackNotifier for NoProgress {
    fn on_primary_failed(&self, _error: &str, _strategies: usize) {}
    fn on_attempt_start(&self, _strategy: FallbackStrategy, _index: usize) {}
    fn on_attempt_complete(&self, _attempt: &FallbackAttempt) {}
}

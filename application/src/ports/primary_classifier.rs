//! Primary classifier port
//!
//! The primary classification operation is opaque to the degradation engine.
//! Callers may hand the orchestrator a closure instead; this trait exists for
//! adapters that want to be injected.

use async_trait::async_trait;
use degrade_domain::{Classification, QueryPayload};
use thiserror::Error;

/// Errors a primary classifier may report
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Classifier unavailable: {0}")]
    Unavailable(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// The primary classification operation.
///
/// `Ok(None)` means the classifier ran but produced nothing; the orchestrator
/// treats it exactly like an error.
#[async_trait]
pub trait PrimaryClassifier: Send + Sync {
    async fn classify(
        &self,
        payload: &QueryPayload,
    ) -> Result<Option<Classification>, ClassifierError>;
}

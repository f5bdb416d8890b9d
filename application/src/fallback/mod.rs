//! Fallback handlers: one per [`FallbackStrategy`].
//!
//! Each handler implements a single capability, [`FallbackHandler::attempt`].
//! The chain is a list of handlers registered once at construction, so the
//! orchestrator's dispatch is a plain iteration and reordering or removing a
//! strategy is a configuration change.

mod alternative;
mod cached;
mod partial;
mod reference_data;
mod registry;
mod static_response;

pub use alternative::{ALTERNATIVE_LOGIC_SUFFIX, AlternativeLogicHandler};
pub use cached::CachedResultsHandler;
pub use partial::PartialResultsHandler;
pub use reference_data::{FallbackDataHandler, SUBSTRING_MATCH_PENALTY};
pub use registry::build_chain;
pub use static_response::StaticResponseHandler;

use degrade_domain::{Classification, FallbackStrategy, QueryPayload};
use std::time::Duration;
use thiserror::Error;

/// Why a strategy produced nothing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrategyError {
    #[error("Empty query")]
    EmptyQuery,

    #[error("No match: {0}")]
    NotFound(String),

    #[error("Cached entry expired ({age_secs}s old, ttl {ttl_secs}s)")]
    Expired { age_secs: u64, ttl_secs: u64 },

    #[error("Confidence {confidence:.2} below minimal threshold {threshold:.2}")]
    BelowThreshold { confidence: f64, threshold: f64 },

    #[error("Misconfigured: {0}")]
    Misconfigured(String),

    #[error("Strategy panicked: {0}")]
    Panicked(String),
}

impl StrategyError {
    pub(crate) fn expired(age: Duration, ttl: Duration) -> Self {
        StrategyError::Expired {
            age_secs: age.as_secs(),
            ttl_secs: ttl.as_secs(),
        }
    }
}

/// What a successful strategy yields.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyYield {
    pub classification: Classification,
    /// Quality of the yielded data in `[0, 1]`
    pub data_quality: f64,
}

impl StrategyYield {
    pub fn new(classification: Classification, data_quality: f64) -> Self {
        Self {
            classification,
            data_quality,
        }
    }
}

/// A single fallback technique.
///
/// Handlers run synchronously and must not block: every built-in handler is
/// an in-memory lookup. A handler that panics is recorded as a failed attempt
/// by the orchestrator.
pub trait FallbackHandler: Send + Sync {
    fn strategy(&self) -> FallbackStrategy;

    fn attempt(&self, payload: &QueryPayload) -> Result<StrategyYield, StrategyError>;
}

/// Extract the query or fail fast for query-dependent strategies.
pub(crate) fn require_query(payload: &QueryPayload) -> Result<&str, StrategyError> {
    let query = payload.query();
    if query.is_empty() {
        return Err(StrategyError::EmptyQuery);
    }
    Ok(query)
}

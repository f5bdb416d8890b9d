//! Graceful degradation domain
//!
//! When the primary classifier fails, an ordered chain of fallback strategies
//! is walked until one produces an answer. Each strategy carries its own
//! confidence discount and maps to a coarse [`DegradationLevel`].
//!
//! ```text
//! primary ──fail──▶ cached_results ─▶ fallback_data ─▶ partial_results
//!                    (×0.9)            (×0.8)           (×0.7)
//!                 ─▶ alternative_logic ─▶ static_response ─▶ critical
//!                    (×0.6)               (×0.4)
//! ```
//!
//! This module only holds data and pure rules; the orchestrator that drives
//! the chain lives in the application layer.

mod attempt;
mod cache_entry;
pub mod diagnostics;
mod level;
mod outcome;
mod policy;
mod quality;
mod stats;
mod strategy;

pub use attempt::FallbackAttempt;
pub use cache_entry::CachedEntry;
pub use level::DegradationLevel;
pub use outcome::DegradationOutcome;
pub use policy::DegradationPolicy;
pub use quality::QualityEstimator;
pub use stats::DegradationStats;
pub use strategy::{FallbackStrategy, StrategyUsed};

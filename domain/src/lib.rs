//! Domain layer for classifier-degrade
//!
//! This crate contains the classification data model and the pure rules of
//! graceful degradation. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Classification
//!
//! A [`Classification`] is the artifact the primary classifier produces for a
//! business query (e.g. an industry code). When the primary classifier fails,
//! a degraded classification is produced by one of the fallback strategies.
//!
//! ## Degradation
//!
//! - **Strategy**: one fallback technique in the ordered chain
//!   ([`FallbackStrategy`])
//! - **Level**: how far the answer deviates from a trusted primary result
//!   ([`DegradationLevel`])
//! - **Outcome**: the structured, always-returned result of one execution
//!   ([`DegradationOutcome`])

pub mod classification;
pub mod config;
pub mod core;
pub mod degradation;
pub mod query;
pub mod util;

// Re-export commonly used types
pub use classification::{Classification, ReferenceEntry, SimpleRule};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use degradation::{
    CachedEntry, DegradationLevel, DegradationOutcome, DegradationPolicy, DegradationStats,
    FallbackAttempt, FallbackStrategy, QualityEstimator, StrategyUsed,
};
pub use query::{BusinessRecord, QueryPayload};

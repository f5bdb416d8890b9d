//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod alternative_scorer;
pub mod fallback_notifier;
pub mod outcome_logger;
pub mod primary_classifier;
pub mod reference_store;
pub mod result_cache;

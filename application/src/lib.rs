//! Application layer for classifier-degrade
//!
//! This crate contains the fallback handlers, the degrade use case, port
//! definitions, and engine parameters. It depends only on the domain layer.

pub mod config;
pub mod fallback;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::EngineParams;
pub use fallback::{FallbackHandler, StrategyError, StrategyYield, build_chain};
pub use ports::{
    alternative_scorer::AlternativeScorer,
    fallback_notifier::{FallbackNotifier, NoProgress},
    outcome_logger::{NoOutcomeLogger, OutcomeEvent, OutcomeLogger},
    primary_classifier::{ClassifierError, PrimaryClassifier},
    reference_store::ReferenceLookup,
    result_cache::{CacheLookup, ResultCache},
};
pub use use_cases::degrade::{DegradationOrchestrator, LastSuccessfulData, PRIMARY_SOURCE};

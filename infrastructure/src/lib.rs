//! Infrastructure layer for classifier-degrade
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod cache;
pub mod classifier;
pub mod config;
pub mod logging;
pub mod reference;
pub mod scoring;

// Re-export commonly used types
pub use cache::InMemoryResultCache;
pub use classifier::{ScriptedClassifier, ScriptedResponse};
pub use config::{
    ConfigLoader, ConfigValidationError, FileCacheConfig, FileConfig, FileDegradationConfig,
    FileLoggingConfig, FileOutputConfig, FileOutputFormat, FileReferenceConfig, FileRuleConfig,
};
pub use logging::JsonlOutcomeLogger;
pub use reference::StaticReferenceStore;
pub use scoring::RuleBasedScorer;

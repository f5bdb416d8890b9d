//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod cache;
mod degradation;
mod logging;
mod output;
mod reference;
mod rules;

pub use cache::FileCacheConfig;
pub use degradation::FileDegradationConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use reference::{FileReferenceConfig, FileReferenceEntry};
pub use rules::{FileRuleConfig, parse_rules};

use crate::reference::StaticReferenceStore;
use crate::scoring::RuleBasedScorer;
use degrade_application::EngineParams;
use degrade_domain::{ConfigIssue, DegradationPolicy, Severity};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Strategy toggles, thresholds and timeouts
    pub degradation: FileDegradationConfig,
    /// Result cache settings
    pub cache: FileCacheConfig,
    /// Static reference data
    pub reference: FileReferenceConfig,
    /// Extra alternative scoring rules
    pub rules: Vec<FileRuleConfig>,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Domain policy plus any conversion issues.
    pub fn to_policy(&self) -> (DegradationPolicy, Vec<ConfigIssue>) {
        self.degradation.to_policy()
    }

    pub fn to_engine_params(&self) -> EngineParams {
        self.degradation.to_engine_params()
    }

    /// Reference store: built-in entries (unless disabled) overlaid with configured ones.
    pub fn reference_store(&self) -> StaticReferenceStore {
        let mut store = if self.reference.use_defaults {
            StaticReferenceStore::with_defaults()
        } else {
            StaticReferenceStore::new()
        };
        store.extend(self.reference.to_entries());
        store
    }

    /// Built-in rules followed by configured ones.
    pub fn scorer(&self) -> RuleBasedScorer {
        RuleBasedScorer::with_defaults().with_rules(parse_rules(&self.rules).0)
    }

    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Covers strategy name parsing, rule conversion, the cache TTL, and every
    /// policy check (threshold ranges and ordering, duplicate strategies).
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let (policy, mut issues) = self.to_policy();
        issues.extend(parse_rules(&self.rules).1);
        issues.extend(self.cache.validate());
        issues.extend(policy.validate());
        issues
    }

    /// Fail on any error-severity issue; otherwise return the warnings.
    pub fn ensure_valid(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) = self
            .validate()
            .into_iter()
            .partition(|issue| issue.severity == Severity::Error);
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError::Invalid(
                errors.into_iter().map(|issue| issue.message).collect(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use degrade_application::ports::reference_store::ReferenceLookup;
    use degrade_application::AlternativeScorer;
    use degrade_domain::{ConfigIssueCode, FallbackStrategy, OutputFormat};
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[degradation]
enable_alternative_logic = false
partial_result_threshold = 0.5
minimal_result_threshold = 0.2
fallback_timeout_ms = 250
strategy_order = ["fallback_data", "cache", "static"]

[cache]
ttl_seconds = 600
sweep_interval_seconds = 0

[reference]
use_defaults = false

[[reference.entries]]
key = "bakery"
code = "311811"
description = "Retail Bakeries"
confidence = 0.8

[[rules]]
keywords = ["florist"]
code = "459310"
description = "Florists"
confidence = 0.5

[output]
format = "full"
color = false

[logging]
outcome_log = "outcomes.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let (policy, issues) = config.to_policy();
        assert!(issues.is_empty());
        assert!(!policy.enable_alternative_logic);
        assert_eq!(policy.fallback_timeout, Duration::from_millis(250));
        assert_eq!(config.cache.ttl(), Duration::from_secs(600));
        assert_eq!(
            policy.effective_order(),
            vec![
                FallbackStrategy::FallbackData,
                FallbackStrategy::CachedResults,
                FallbackStrategy::StaticResponse,
            ]
        );
        assert!(config.cache.sweep_interval().is_none());
        assert_eq!(config.reference_store().len(), 1);
        assert_eq!(config.scorer().score("corner florist").unwrap().code, "459310");
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(config.logging.outcome_log.is_some());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[degradation]
minimal_result_threshold = 0.4
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!((config.degradation.minimal_result_threshold - 0.4).abs() < f64::EPSILON);
        // Defaults should apply
        assert!(config.degradation.enable_cached_results);
        assert_eq!(config.cache.ttl_seconds, 3600);
        assert!(config.reference.use_defaults);
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
        assert!(config.ensure_valid().unwrap().is_empty());
    }

    #[test]
    fn test_minimal_above_one_is_error() {
        let mut config = FileConfig::default();
        config.degradation.minimal_result_threshold = 1.5;

        let issues = config.validate();
        assert!(
            issues
                .iter()
                .any(|i| i.code == ConfigIssueCode::MinimalAboveOne)
        );
        let err = config.ensure_valid().unwrap_err();
        assert!(err.to_string().contains("minimal_result_threshold"));
    }

    #[test]
    fn test_unknown_strategy_is_warning() {
        let mut config = FileConfig::default();
        config.degradation.strategy_order = vec!["cache".to_string(), "telepathy".to_string()];

        let warnings = config.ensure_valid().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, Severity::Warning);
    }
}

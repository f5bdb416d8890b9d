//! Degradation configuration from TOML (`[degradation]` section)

use degrade_application::EngineParams;
use degrade_domain::{ConfigIssue, ConfigIssueCode, DegradationPolicy, FallbackStrategy};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw degradation configuration from TOML.
///
/// # Example
///
/// ```toml
/// [degradation]
/// enable_partial_results = false
/// minimal_result_threshold = 0.25
/// strategy_order = ["fallback_data", "cached_results", "static_response"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDegradationConfig {
    pub enable_cached_results: bool,
    pub enable_fallback_data: bool,
    pub enable_partial_results: bool,
    pub enable_alternative_logic: bool,
    pub partial_result_threshold: f64,
    pub minimal_result_threshold: f64,
    /// Attempts slower than this are flagged with a warning
    pub fallback_timeout_ms: u64,
    /// Deadline for the primary operation; 0 waits indefinitely
    pub primary_timeout_seconds: u64,
    /// Strategy names (aliases accepted, e.g. `cache`, `static`)
    pub strategy_order: Vec<String>,
}

impl Default for FileDegradationConfig {
    fn default() -> Self {
        let policy = DegradationPolicy::default();
        let params = EngineParams::default();
        Self {
            enable_cached_results: policy.enable_cached_results,
            enable_fallback_data: policy.enable_fallback_data,
            enable_partial_results: policy.enable_partial_results,
            enable_alternative_logic: policy.enable_alternative_logic,
            partial_result_threshold: policy.partial_result_threshold,
            minimal_result_threshold: policy.minimal_result_threshold,
            fallback_timeout_ms: policy.fallback_timeout.as_millis() as u64,
            primary_timeout_seconds: params.primary_timeout.map_or(0, |d| d.as_secs()),
            strategy_order: policy
                .strategy_order
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
        }
    }
}

impl FileDegradationConfig {
    /// Parse `strategy_order`, skipping unknown names with a warning each.
    pub fn parse_strategy_order(&self) -> (Vec<FallbackStrategy>, Vec<ConfigIssue>) {
        let mut order = Vec::with_capacity(self.strategy_order.len());
        let mut issues = Vec::new();
        for name in &self.strategy_order {
            match name.parse::<FallbackStrategy>() {
                Ok(strategy) => order.push(strategy),
                Err(_) => issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnknownStrategy {
                        value: name.clone(),
                    },
                    format!("degradation.strategy_order: unknown strategy '{name}', ignored"),
                )),
            }
        }
        (order, issues)
    }

    /// Convert to a domain policy.
    pub fn to_policy(&self) -> (DegradationPolicy, Vec<ConfigIssue>) {
        let (order, issues) = self.parse_strategy_order();
        let policy = DegradationPolicy {
            enable_cached_results: self.enable_cached_results,
            enable_fallback_data: self.enable_fallback_data,
            enable_partial_results: self.enable_partial_results,
            enable_alternative_logic: self.enable_alternative_logic,
            partial_result_threshold: self.partial_result_threshold,
            minimal_result_threshold: self.minimal_result_threshold,
            fallback_timeout: Duration::from_millis(self.fallback_timeout_ms),
            strategy_order: order,
        };
        (policy, issues)
    }

    pub fn to_engine_params(&self) -> EngineParams {
        let timeout =
            (self.primary_timeout_seconds > 0).then(|| Duration::from_secs(self.primary_timeout_seconds));
        EngineParams::default().with_primary_timeout(timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_domain_policy() {
        let (policy, issues) = FileDegradationConfig::default().to_policy();
        assert!(issues.is_empty());
        assert_eq!(policy, DegradationPolicy::default());
    }

    #[test]
    fn test_strategy_aliases_and_unknown_names() {
        let config = FileDegradationConfig {
            strategy_order: vec![
                "static".to_string(),
                "cache".to_string(),
                "magic".to_string(),
            ],
            ..Default::default()
        };
        let (order, issues) = config.parse_strategy_order();
        assert_eq!(
            order,
            vec![FallbackStrategy::StaticResponse, FallbackStrategy::CachedResults]
        );
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::UnknownStrategy { value } if value == "magic"
        ));
    }

    #[test]
    fn test_primary_timeout_zero_disables_deadline() {
        let config = FileDegradationConfig {
            primary_timeout_seconds: 0,
            ..Default::default()
        };
        assert!(config.to_engine_params().primary_timeout.is_none());
        assert_eq!(
            FileDegradationConfig::default().to_engine_params().primary_timeout,
            Some(Duration::from_secs(30))
        );
    }
}

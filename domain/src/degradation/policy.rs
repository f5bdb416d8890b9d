//! Degradation policy: which strategies run, in what order, with which thresholds.

use super::FallbackStrategy;
use crate::config::{ConfigIssue, ConfigIssueCode};
use std::time::Duration;

/// Degradation behavior policy.
///
/// The static response strategy is the safety net and cannot be disabled;
/// [`DegradationPolicy::effective_order`] always ends with it.
#[derive(Debug, Clone, PartialEq)]
pub struct DegradationPolicy {
    pub enable_cached_results: bool,
    pub enable_fallback_data: bool,
    pub enable_partial_results: bool,
    pub enable_alternative_logic: bool,
    /// Lowest confidence a partial result is allowed to carry.
    pub partial_result_threshold: f64,
    /// Lowest confidence any degraded result is allowed to carry.
    pub minimal_result_threshold: f64,
    /// Fallback attempts running longer than this are flagged in warnings.
    pub fallback_timeout: Duration,
    /// Preferred strategy order.
    pub strategy_order: Vec<FallbackStrategy>,
}

impl Default for DegradationPolicy {
    fn default() -> Self {
        Self {
            enable_cached_results: true,
            enable_fallback_data: true,
            enable_partial_results: true,
            enable_alternative_logic: true,
            partial_result_threshold: 0.6,
            minimal_result_threshold: 0.3,
            fallback_timeout: Duration::from_secs(5),
            strategy_order: FallbackStrategy::ALL.to_vec(),
        }
    }
}

impl DegradationPolicy {
    // ==================== Builder Methods ====================

    pub fn with_strategy_enabled(mut self, strategy: FallbackStrategy, enabled: bool) -> Self {
        match strategy {
            FallbackStrategy::CachedResults => self.enable_cached_results = enabled,
            FallbackStrategy::FallbackData => self.enable_fallback_data = enabled,
            FallbackStrategy::PartialResults => self.enable_partial_results = enabled,
            FallbackStrategy::AlternativeLogic => self.enable_alternative_logic = enabled,
            FallbackStrategy::StaticResponse => {}
        }
        self
    }

    /// Disable every optional strategy, leaving only the static response.
    pub fn only_static_response(self) -> Self {
        self.with_strategy_enabled(FallbackStrategy::CachedResults, false)
            .with_strategy_enabled(FallbackStrategy::FallbackData, false)
            .with_strategy_enabled(FallbackStrategy::PartialResults, false)
            .with_strategy_enabled(FallbackStrategy::AlternativeLogic, false)
    }

    pub fn with_thresholds(mut self, partial: f64, minimal: f64) -> Self {
        self.partial_result_threshold = partial;
        self.minimal_result_threshold = minimal;
        self
    }

    pub fn with_fallback_timeout(mut self, timeout: Duration) -> Self {
        self.fallback_timeout = timeout;
        self
    }

    pub fn with_strategy_order(mut self, order: Vec<FallbackStrategy>) -> Self {
        self.strategy_order = order;
        self
    }

    // ==================== Queries ====================

    pub fn is_enabled(&self, strategy: FallbackStrategy) -> bool {
        match strategy {
            FallbackStrategy::CachedResults => self.enable_cached_results,
            FallbackStrategy::FallbackData => self.enable_fallback_data,
            FallbackStrategy::PartialResults => self.enable_partial_results,
            FallbackStrategy::AlternativeLogic => self.enable_alternative_logic,
            FallbackStrategy::StaticResponse => true,
        }
    }

    /// Enabled strategies in configured order, deduplicated, static response last
    /// when the order does not place it explicitly.
    pub fn effective_order(&self) -> Vec<FallbackStrategy> {
        let mut order: Vec<FallbackStrategy> = Vec::with_capacity(FallbackStrategy::ALL.len());
        for strategy in &self.strategy_order {
            if self.is_enabled(*strategy) && !order.contains(strategy) {
                order.push(*strategy);
            }
        }
        if !order.contains(&FallbackStrategy::StaticResponse) {
            order.push(FallbackStrategy::StaticResponse);
        }
        order
    }

    /// Whether partial results can ever succeed under these thresholds.
    pub fn partial_thresholds_consistent(&self) -> bool {
        self.partial_result_threshold >= self.minimal_result_threshold
    }

    // ==================== Validation ====================

    /// Validate the policy, returning every detected issue.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (field, value) in [
            ("partial_result_threshold", self.partial_result_threshold),
            ("minimal_result_threshold", self.minimal_result_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::ThresholdOutOfRange {
                        field: field.to_string(),
                    },
                    format!("{field}: {value} is outside [0, 1]"),
                ));
            }
        }

        if self.minimal_result_threshold > 1.0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::MinimalAboveOne,
                "minimal_result_threshold > 1.0: the static response safety net can never succeed",
            ));
        }

        if !self.partial_thresholds_consistent() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MinimalAboveThreshold,
                format!(
                    "minimal_result_threshold ({}) exceeds partial_result_threshold ({}): partial results will always fail",
                    self.minimal_result_threshold, self.partial_result_threshold
                ),
            ));
        }

        let mut seen: Vec<FallbackStrategy> = Vec::new();
        for strategy in &self.strategy_order {
            if seen.contains(strategy) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::DuplicateStrategy {
                        strategy: strategy.to_string(),
                    },
                    format!("strategy_order: '{strategy}' listed more than once"),
                ));
            } else {
                seen.push(*strategy);
            }
        }

        if self.fallback_timeout.is_zero() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroDuration {
                    field: "fallback_timeout".to_string(),
                },
                "fallback_timeout is zero: every attempt will be flagged as slow",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Severity, has_errors};

    #[test]
    fn test_default_is_valid() {
        let policy = DegradationPolicy::default();
        assert!(policy.validate().is_empty());
        assert_eq!(policy.effective_order(), FallbackStrategy::ALL.to_vec());
    }

    #[test]
    fn test_static_response_cannot_be_disabled() {
        let policy = DegradationPolicy::default()
            .with_strategy_enabled(FallbackStrategy::StaticResponse, false)
            .only_static_response();
        assert_eq!(
            policy.effective_order(),
            vec![FallbackStrategy::StaticResponse]
        );
    }

    #[test]
    fn test_effective_order_follows_configuration() {
        let policy = DegradationPolicy::default()
            .with_strategy_order(vec![
                FallbackStrategy::AlternativeLogic,
                FallbackStrategy::StaticResponse,
                FallbackStrategy::CachedResults,
                FallbackStrategy::AlternativeLogic,
            ])
            .with_strategy_enabled(FallbackStrategy::CachedResults, false);
        assert_eq!(
            policy.effective_order(),
            vec![
                FallbackStrategy::AlternativeLogic,
                FallbackStrategy::StaticResponse
            ]
        );
    }

    #[test]
    fn test_minimal_above_one_is_error() {
        let policy = DegradationPolicy::default().with_thresholds(0.6, 1.5);
        let issues = policy.validate();
        assert!(has_errors(&issues));
        assert!(
            issues
                .iter()
                .any(|i| i.code == ConfigIssueCode::MinimalAboveOne)
        );
    }

    #[test]
    fn test_inverted_thresholds_warn() {
        let policy = DegradationPolicy::default().with_thresholds(0.2, 0.4);
        let issues = policy.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].code, ConfigIssueCode::MinimalAboveThreshold);
        assert!(!policy.partial_thresholds_consistent());
    }

    #[test]
    fn test_duplicate_and_zero_duration_warn() {
        let policy = DegradationPolicy::default()
            .with_strategy_order(vec![
                FallbackStrategy::FallbackData,
                FallbackStrategy::FallbackData,
            ])
            .with_fallback_timeout(Duration::ZERO);
        let codes: Vec<_> = policy.validate().into_iter().map(|i| i.code).collect();
        assert!(codes.contains(&ConfigIssueCode::DuplicateStrategy {
            strategy: "fallback_data".to_string()
        }));
        assert!(codes.contains(&ConfigIssueCode::ZeroDuration {
            field: "fallback_timeout".to_string()
        }));
    }
}

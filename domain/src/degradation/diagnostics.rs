//! Warning and recommendation generation for degraded outcomes.
//!
//! Outcomes carry human-readable diagnostics next to their machine-readable
//! fields so callers can surface them verbatim to an operator.

use super::{FallbackAttempt, FallbackStrategy};
use std::time::Duration;

/// Data quality below which a generic quality warning is added.
pub const LOW_QUALITY_THRESHOLD: f64 = 0.7;

pub const MONITOR_HEALTH: &str = "Monitor system health and primary classifier availability";

/// Recommendations attached to an outcome when every strategy failed.
pub const EXHAUSTION_RECOMMENDATIONS: [&str; 4] = [
    "Check network connectivity to the primary classifier",
    "Verify data store availability",
    "Inspect system logs for error details",
    "Consider manual intervention for this query",
];

/// Warning describing what relying on `strategy` means for the caller.
pub fn strategy_warning(strategy: FallbackStrategy) -> &'static str {
    match strategy {
        FallbackStrategy::CachedResults => "Using cached data: may not reflect recent changes",
        FallbackStrategy::FallbackData => "Using static reference data: results may be outdated",
        FallbackStrategy::PartialResults => {
            "Using partial results from keyword heuristics: classification is approximate"
        }
        FallbackStrategy::AlternativeLogic => {
            "Using alternative rule-based logic: accuracy may be reduced"
        }
        FallbackStrategy::StaticResponse => {
            "Using minimal static response: manual review required"
        }
    }
}

/// Remediation an operator can take after `strategy` answered.
pub fn strategy_recommendation(strategy: FallbackStrategy) -> &'static str {
    match strategy {
        FallbackStrategy::CachedResults => "Refresh cached results once the primary classifier recovers",
        FallbackStrategy::FallbackData => "Review and update static reference data regularly",
        FallbackStrategy::PartialResults => {
            "Collect more business details to improve classification accuracy"
        }
        FallbackStrategy::AlternativeLogic => "Review alternative scoring rules for accuracy",
        FallbackStrategy::StaticResponse => "Perform a manual classification review",
    }
}

/// Guidance derived from the primary error text.
pub fn error_pattern_recommendations(error: &str) -> Vec<String> {
    let error = error.to_lowercase();
    let mut out = Vec::new();
    if error.contains("timeout") || error.contains("timed out") || error.contains("deadline") {
        out.push(
            "Consider increasing the primary operation timeout or optimizing query performance"
                .to_string(),
        );
    }
    if error.contains("connection") {
        out.push("Check network connectivity and service availability".to_string());
    }
    if error.contains("authentication") || error.contains("unauthorized") {
        out.push("Verify API credentials and authentication configuration".to_string());
    }
    out
}

/// Warnings for a successful fallback attempt.
pub fn warnings_for(attempt: &FallbackAttempt, fallback_timeout: Duration) -> Vec<String> {
    let mut warnings = vec![strategy_warning(attempt.strategy).to_string()];

    if attempt.data_quality < LOW_QUALITY_THRESHOLD {
        warnings.push(format!(
            "Data quality is low ({:.2}): verify the result before relying on it",
            attempt.data_quality
        ));
    }

    if attempt.exceeded(fallback_timeout) {
        warnings.push(format!(
            "Fallback strategy {} took {} ms, exceeding the {} ms timeout",
            attempt.strategy,
            attempt.duration.as_millis(),
            fallback_timeout.as_millis()
        ));
    }

    warnings
}

/// Recommendations for an outcome answered by `strategy` after `primary_error`.
pub fn recommendations_for(strategy: FallbackStrategy, primary_error: &str) -> Vec<String> {
    let mut recommendations = vec![
        MONITOR_HEALTH.to_string(),
        strategy_recommendation(strategy).to_string(),
    ];
    for rec in error_pattern_recommendations(primary_error) {
        if !recommendations.contains(&rec) {
            recommendations.push(rec);
        }
    }
    recommendations
}

pub fn exhaustion_recommendations() -> Vec<String> {
    EXHAUSTION_RECOMMENDATIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

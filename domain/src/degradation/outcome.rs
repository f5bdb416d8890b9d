//! Degradation outcome: the structured result of one execution

use super::diagnostics;
use super::{DegradationLevel, FallbackAttempt, FallbackStrategy, StrategyUsed};
use crate::classification::Classification;
use crate::util::{clamp_unit, duration_ms};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

/// The orchestrator's output for one execution.
///
/// Built once per call and not modified after it is returned. `attempts`
/// lists evaluated strategies in chain order and is the audit trail for
/// how `degradation_level` was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradationOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    pub degradation_level: DegradationLevel,
    pub strategy_used: StrategyUsed,
    pub confidence: f64,
    pub quality_score: f64,
    #[serde(rename = "processing_time_ms", with = "duration_ms")]
    pub processing_time: Duration,
    pub attempts: Vec<FallbackAttempt>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
    pub metadata: BTreeMap<String, Value>,
}

impl DegradationOutcome {
    /// Outcome for a successful primary operation.
    pub fn primary(classification: Classification, quality_score: f64) -> Self {
        Self {
            success: true,
            classification: Some(classification),
            degradation_level: DegradationLevel::None,
            strategy_used: StrategyUsed::Primary,
            confidence: 1.0,
            quality_score: clamp_unit(quality_score),
            processing_time: Duration::ZERO,
            attempts: Vec::new(),
            warnings: Vec::new(),
            recommendations: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    /// Outcome for a fallback strategy that answered after `primary_error`.
    ///
    /// `attempts` must end with the winning attempt.
    pub fn degraded(
        strategy: FallbackStrategy,
        classification: Classification,
        quality_score: f64,
        attempts: Vec<FallbackAttempt>,
        primary_error: &str,
        fallback_timeout: Duration,
    ) -> Self {
        let data_quality = attempts
            .last()
            .filter(|a| a.success && a.strategy == strategy)
            .map(|a| a.data_quality)
            .unwrap_or(0.0);
        let warnings = attempts
            .last()
            .map(|a| diagnostics::warnings_for(a, fallback_timeout))
            .unwrap_or_default();

        Self {
            success: true,
            classification: Some(classification),
            degradation_level: strategy.degradation_level(),
            strategy_used: StrategyUsed::Fallback(strategy),
            confidence: clamp_unit(data_quality * strategy.confidence_factor()),
            quality_score: clamp_unit(quality_score),
            processing_time: Duration::ZERO,
            attempts,
            warnings,
            recommendations: diagnostics::recommendations_for(strategy, primary_error),
            metadata: BTreeMap::new(),
        }
    }

    /// Outcome when every strategy failed.
    pub fn exhausted(attempts: Vec<FallbackAttempt>) -> Self {
        Self {
            success: false,
            classification: None,
            degradation_level: DegradationLevel::Critical,
            strategy_used: StrategyUsed::None,
            confidence: 0.0,
            quality_score: 0.0,
            processing_time: Duration::ZERO,
            attempts,
            warnings: vec!["All fallback strategies failed: no classification available".to_string()],
            recommendations: diagnostics::exhaustion_recommendations(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_processing_time(mut self, elapsed: Duration) -> Self {
        self.processing_time = elapsed;
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn is_degraded(&self) -> bool {
        self.degradation_level.is_degraded()
    }

    /// The successful attempt, if a fallback strategy answered.
    pub fn winning_attempt(&self) -> Option<&FallbackAttempt> {
        self.attempts.iter().find(|a| a.success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Classification {
        Classification::new("ref-retail", "44-45", "Retail Trade").with_confidence(0.7)
    }

    #[test]
    fn test_primary_outcome() {
        let outcome = DegradationOutcome::primary(sample(), 0.9);
        assert!(outcome.success);
        assert_eq!(outcome.strategy_used, StrategyUsed::Primary);
        assert_eq!(outcome.degradation_level, DegradationLevel::None);
        assert_eq!(outcome.confidence, 1.0);
        assert!(outcome.attempts.is_empty());
    }

    #[test]
    fn test_degraded_confidence_is_quality_times_factor() {
        let attempts = vec![
            FallbackAttempt::failed(FallbackStrategy::CachedResults, Duration::ZERO, "miss"),
            FallbackAttempt::succeeded(FallbackStrategy::FallbackData, Duration::ZERO, 0.56),
        ];
        let outcome = DegradationOutcome::degraded(
            FallbackStrategy::FallbackData,
            sample(),
            0.8,
            attempts,
            "connection refused",
            Duration::from_secs(5),
        );
        assert!((outcome.confidence - 0.448).abs() < 1e-9);
        assert_eq!(outcome.degradation_level, DegradationLevel::Partial);
        assert_eq!(
            outcome.winning_attempt().map(|a| a.strategy),
            Some(FallbackStrategy::FallbackData)
        );
    }

    #[test]
    fn test_exhausted_outcome() {
        let outcome = DegradationOutcome::exhausted(vec![]);
        assert!(!outcome.success);
        assert_eq!(outcome.strategy_used, StrategyUsed::None);
        assert_eq!(outcome.degradation_level, DegradationLevel::Critical);
        assert_eq!(outcome.confidence, 0.0);
        assert_eq!(outcome.recommendations.len(), 4);
    }

    #[test]
    fn test_serialize_fields() {
        let outcome = DegradationOutcome::exhausted(vec![])
            .with_processing_time(Duration::from_millis(12))
            .with_metadata("query", "bakery");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["strategy_used"], "none");
        assert_eq!(json["degradation_level"], "critical");
        assert_eq!(json["processing_time_ms"], 12);
        assert_eq!(json["metadata"]["query"], "bakery");
        assert!(json.get("classification").is_none());
    }
}

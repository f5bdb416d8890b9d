//! Alternative logic strategy: rule-based scoring

use super::{FallbackHandler, StrategyError, StrategyYield, require_query};
use crate::ports::alternative_scorer::AlternativeScorer;
use degrade_domain::{FallbackStrategy, QueryPayload};
use std::sync::Arc;

/// Suffix appended to descriptions produced by alternative scoring.
pub const ALTERNATIVE_LOGIC_SUFFIX: &str = " (Alternative Logic)";

/// Answers from the first matching alternative scoring rule.
pub struct AlternativeLogicHandler {
    scorer: Arc<dyn AlternativeScorer>,
    minimal_threshold: f64,
}

impl AlternativeLogicHandler {
    pub fn new(scorer: Arc<dyn AlternativeScorer>, minimal_threshold: f64) -> Self {
        Self {
            scorer,
            minimal_threshold,
        }
    }
}

impl FallbackHandler for AlternativeLogicHandler {
    fn strategy(&self) -> FallbackStrategy {
        FallbackStrategy::AlternativeLogic
    }

    fn attempt(&self, payload: &QueryPayload) -> Result<StrategyYield, StrategyError> {
        let query = require_query(payload)?.to_lowercase();

        let Some(mut classification) = self.scorer.score(&query) else {
            return Err(StrategyError::NotFound(format!(
                "no alternative rule matched '{query}'"
            )));
        };

        if classification.confidence < self.minimal_threshold {
            return Err(StrategyError::BelowThreshold {
                confidence: classification.confidence,
                threshold: self.minimal_threshold,
            });
        }

        classification.description.push_str(ALTERNATIVE_LOGIC_SUFFIX);
        let quality = classification.confidence;
        Ok(StrategyYield::new(classification, quality))
    }
}

//! Static response strategy: the safety net

use super::{FallbackHandler, StrategyError, StrategyYield};
use degrade_domain::{Classification, FallbackStrategy, QueryPayload};

/// Always answers with a minimal "nonclassifiable" classification whose
/// quality equals the minimal threshold, unless that threshold exceeds 1.0.
pub struct StaticResponseHandler {
    minimal_threshold: f64,
}

impl StaticResponseHandler {
    pub fn new(minimal_threshold: f64) -> Self {
        Self { minimal_threshold }
    }
}

impl FallbackHandler for StaticResponseHandler {
    fn strategy(&self) -> FallbackStrategy {
        FallbackStrategy::StaticResponse
    }

    fn attempt(&self, _payload: &QueryPayload) -> Result<StrategyYield, StrategyError> {
        if self.minimal_threshold > 1.0 {
            return Err(StrategyError::Misconfigured(format!(
                "minimal_result_threshold {} exceeds 1.0",
                self.minimal_threshold
            )));
        }

        let classification =
            Classification::new("static-nonclassifiable", "999990", "Nonclassifiable Establishments")
                .with_code_type("NAICS")
                .with_category("Unclassified")
                .with_confidence(self.minimal_threshold);

        Ok(StrategyYield::new(classification, self.minimal_threshold))
    }
}

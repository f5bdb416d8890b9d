//! Partial results strategy: keyword heuristic templates

use super::{FallbackHandler, StrategyError, StrategyYield};
use degrade_domain::{Classification, FallbackStrategy, QueryPayload};

/// Keyword heuristic: any keyword in the lower-cased query selects the template.
struct Heuristic {
    keywords: &'static [&'static str],
    id: &'static str,
    code: &'static str,
    category: &'static str,
    description: &'static str,
    confidence: f64,
}

static HEURISTICS: [Heuristic; 3] = [
    Heuristic {
        keywords: &["restaurant", "food"],
        id: "partial-food-service",
        code: "722",
        category: "Food Service",
        description: "Food Services and Drinking Places",
        confidence: 0.6,
    },
    Heuristic {
        keywords: &["retail", "store"],
        id: "partial-retail",
        code: "44-45",
        category: "Retail",
        description: "Retail Trade",
        confidence: 0.6,
    },
    Heuristic {
        keywords: &["consulting", "professional"],
        id: "partial-professional-services",
        code: "541",
        category: "Professional Services",
        description: "Professional, Scientific, and Technical Services",
        confidence: 0.6,
    },
];

static GENERIC: Heuristic = Heuristic {
    keywords: &[],
    id: "partial-generic",
    code: "999990",
    category: "General Business",
    description: "General Business Establishment",
    confidence: 0.3,
};

/// Synthesizes an approximate classification from keyword heuristics.
///
/// Does not need a query: an unrecognized or empty query yields the generic
/// low-confidence template. Fails only when the configured thresholds are
/// inconsistent (minimal above partial).
pub struct PartialResultsHandler {
    partial_threshold: f64,
    minimal_threshold: f64,
}

impl PartialResultsHandler {
    pub fn new(partial_threshold: f64, minimal_threshold: f64) -> Self {
        Self {
            partial_threshold,
            minimal_threshold,
        }
    }

    fn select(query_lower: &str) -> &'static Heuristic {
        HEURISTICS
            .iter()
            .find(|h| h.keywords.iter().any(|k| query_lower.contains(k)))
            .unwrap_or(&GENERIC)
    }
}

impl FallbackHandler for PartialResultsHandler {
    fn strategy(&self) -> FallbackStrategy {
        FallbackStrategy::PartialResults
    }

    fn attempt(&self, payload: &QueryPayload) -> Result<StrategyYield, StrategyError> {
        if self.partial_threshold < self.minimal_threshold {
            return Err(StrategyError::Misconfigured(format!(
                "partial_result_threshold {} is below minimal_result_threshold {}",
                self.partial_threshold, self.minimal_threshold
            )));
        }

        let heuristic = Self::select(&payload.query().to_lowercase());
        let classification = Classification::new(heuristic.id, heuristic.code, heuristic.description)
            .with_code_type("NAICS")
            .with_category(heuristic.category)
            .with_confidence(heuristic.confidence);

        Ok(StrategyYield::new(classification, heuristic.confidence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(query: &str) -> StrategyYield {
        PartialResultsHandler::new(0.6, 0.3)
            .attempt(&QueryPayload::text(query))
            .unwrap()
    }

    #[test]
    fn test_keyword_templates() {
        assert_eq!(attempt("Joe's Restaurant").classification.category, "Food Service");
        assert_eq!(attempt("corner store").classification.code, "44-45");
        assert_eq!(
            attempt("Acme Professional Group").classification.category,
            "Professional Services"
        );
    }

    #[test]
    fn test_generic_template_for_unknown_or_empty() {
        let y = attempt("zyx holdings");
        assert_eq!(y.classification.id, "partial-generic");
        assert!((y.data_quality - 0.3).abs() < 1e-9);
        assert_eq!(attempt("").classification.id, "partial-generic");
    }

    #[test]
    fn test_inverted_thresholds_always_fail() {
        let handler = PartialResultsHandler::new(0.2, 0.5);
        assert!(matches!(
            handler.attempt(&QueryPayload::text("restaurant")),
            Err(StrategyError::Misconfigured(_))
        ));
    }

    #[test]
    fn test_equal_thresholds_allowed() {
        let handler = PartialResultsHandler::new(0.4, 0.4);
        assert!(handler.attempt(&QueryPayload::text("store")).is_ok());
    }
}

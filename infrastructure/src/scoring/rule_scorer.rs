//! Keyword rule scorer used by the alternative-logic strategy.

use degrade_application::ports::alternative_scorer::AlternativeScorer;
use degrade_domain::{Classification, SimpleRule};
use tracing::trace;

/// Scores a query against rules in declaration order; first match wins.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedScorer {
    rules: Vec<SimpleRule>,
}

impl RuleBasedScorer {
    pub fn new(rules: Vec<SimpleRule>) -> Self {
        Self { rules }
    }

    /// Scorer with the built-in rule set.
    pub fn with_defaults() -> Self {
        Self::new(default_rules())
    }

    /// Append rules after the existing ones.
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = SimpleRule>) -> Self {
        self.rules.extend(rules);
        self
    }
}

impl AlternativeScorer for RuleBasedScorer {
    fn score(&self, query: &str) -> Option<Classification> {
        let query = query.to_lowercase();
        self.rules.iter().find_map(|rule| {
            let keyword = rule.matched_keyword(&query)?;
            trace!("Rule keyword '{}' matched '{}'", keyword, query);
            Some(
                rule.template
                    .instantiate()
                    .with_confidence(rule.base_confidence),
            )
        })
    }

    fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

fn template(id: &str, code: &str, category: &str, description: &str) -> Classification {
    Classification::new(id, code, description)
        .with_code_type("NAICS")
        .with_category(category)
}

pub fn default_rules() -> Vec<SimpleRule> {
    vec![
        SimpleRule::new(
            ["tech", "software", "digital", "app"],
            template("alt-541511", "541511", "Technology", "Custom Computer Programming Services"),
            0.5,
        ),
        SimpleRule::new(
            ["restaurant", "cafe", "diner", "kitchen"],
            template("alt-722511", "722511", "Food Service", "Full-Service Restaurants"),
            0.5,
        ),
        SimpleRule::new(
            ["shop", "store", "retail", "boutique"],
            template("alt-452319", "452319", "Retail", "All Other General Merchandise Stores"),
            0.45,
        ),
        SimpleRule::new(
            ["law", "legal", "attorney"],
            template("alt-541110", "541110", "Professional Services", "Offices of Lawyers"),
            0.5,
        ),
        SimpleRule::new(
            ["clinic", "medical", "health"],
            template("alt-621111", "621111", "Healthcare", "Offices of Physicians"),
            0.45,
        ),
        SimpleRule::new(
            ["construction", "builder", "contractor"],
            template("alt-236220", "236220", "Construction", "Commercial and Institutional Building Construction"),
            0.45,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_rule_in_declaration_order_wins() {
        let scorer = RuleBasedScorer::with_defaults();
        // "software" (rule 1) and "shop" (rule 3) both match
        let c = scorer.score("Software Shop Inc").unwrap();
        assert_eq!(c.code, "541511");
        assert!((c.confidence - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_match() {
        assert!(RuleBasedScorer::with_defaults().score("zyx holdings").is_none());
    }

    #[test]
    fn test_custom_rules_appended() {
        let scorer = RuleBasedScorer::new(vec![]).with_rules([SimpleRule::new(
            ["bakery"],
            template("alt-311811", "311811", "Food Service", "Retail Bakeries"),
            0.55,
        )]);
        assert_eq!(scorer.rule_count(), 1);
        assert_eq!(scorer.score("Main Street Bakery").unwrap().code, "311811");
    }
}

//! Alternative scoring adapters.

mod rule_scorer;

pub use rule_scorer::RuleBasedScorer;

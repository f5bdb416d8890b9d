//! Alternative scoring port

use degrade_domain::Classification;

/// Rule-based scorer consulted when richer strategies fail.
pub trait AlternativeScorer: Send + Sync {
    /// Classification from the first matching rule in declaration order.
    ///
    /// The returned confidence is the rule's base confidence.
    fn score(&self, query: &str) -> Option<Classification>;

    fn rule_count(&self) -> usize;
}

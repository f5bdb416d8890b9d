//! Keyword rules for alternative scoring

use super::Classification;
use crate::util::clamp_unit;
use serde::{Deserialize, Serialize};

/// A keyword rule mapping a query to a coarse classification.
///
/// Immutable once built. A rule matches when any of its keywords is a
/// substring of the lower-cased query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleRule {
    /// Lower-cased keywords, kept in declaration order
    pub keywords: Vec<String>,
    /// Classification template emitted on a match
    pub template: Classification,
    /// Confidence assigned to a match
    pub base_confidence: f64,
}

impl SimpleRule {
    pub fn new<I, S>(keywords: I, template: Classification, base_confidence: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() && !normalized.contains(&keyword) {
                normalized.push(keyword);
            }
        }
        Self {
            keywords: normalized,
            template,
            base_confidence: clamp_unit(base_confidence),
        }
    }

    /// First keyword found in `query_lower`, if any.
    pub fn matched_keyword(&self, query_lower: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| query_lower.contains(k.as_str()))
            .map(String::as_str)
    }

    pub fn matches(&self, query_lower: &str) -> bool {
        self.matched_keyword(query_lower).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> SimpleRule {
        SimpleRule::new(
            ["Cafe", "restaurant", " ", "cafe"],
            Classification::new("alt-722", "722", "Food Services"),
            0.5,
        )
    }

    #[test]
    fn test_keywords_are_normalized() {
        assert_eq!(rule().keywords, vec!["cafe", "restaurant"]);
    }

    #[test]
    fn test_matches_substring() {
        assert!(rule().matches("corner cafeteria llc"));
        assert_eq!(rule().matched_keyword("joe's restaurant"), Some("restaurant"));
        assert!(!rule().matches("hardware store"));
    }

    #[test]
    fn test_base_confidence_clamped() {
        let r = SimpleRule::new(["x"], Classification::new("a", "b", "c"), 2.0);
        assert_eq!(r.base_confidence, 1.0);
    }
}

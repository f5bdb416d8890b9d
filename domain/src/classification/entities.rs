//! Classification entity

use crate::util::clamp_unit;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A classification of a business query (e.g. an industry code).
///
/// Owned by whichever component produced it last. Outcomes and cache entries
/// hold their own clones, never a shared reference.
///
/// # Example
///
/// ```
/// use degrade_domain::Classification;
///
/// let c = Classification::new("naics-722511", "722511", "Full-Service Restaurants")
///     .with_code_type("NAICS")
///     .with_category("Food Service")
///     .with_confidence(0.85);
/// assert_eq!(c.code, "722511");
/// assert!((c.confidence - 0.85).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Stable identifier of this classification
    pub id: String,
    /// Classification code (e.g. "722511")
    pub code: String,
    /// Code system (e.g. "NAICS", "SIC")
    #[serde(default)]
    pub code_type: String,
    /// Coarse category (e.g. "Food Service")
    #[serde(default)]
    pub category: String,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Confidence in `[0, 1]`
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Classification {
    /// Create a classification stamped with the current time.
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            code: code.into(),
            code_type: String::new(),
            category: String::new(),
            description: description.into(),
            confidence: 0.0,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    pub fn with_code_type(mut self, code_type: impl Into<String>) -> Self {
        self.code_type = code_type.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the confidence, clamped into `[0, 1]`.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = clamp_unit(confidence);
        self
    }

    pub fn with_updated_at(mut self, updated_at: Option<DateTime<Utc>>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Clone this classification as a freshly stamped copy.
    ///
    /// Templates (static data, rules) are reused across calls; each produced
    /// result gets its own timestamps.
    pub fn instantiate(&self) -> Self {
        let now = Utc::now();
        Self {
            created_at: Some(now),
            updated_at: Some(now),
            ..self.clone()
        }
    }

    /// Weighted structural completeness in `[0, 1]`.
    ///
    /// code 0.3, description 0.3, category 0.2, code type 0.2.
    pub fn completeness(&self) -> f64 {
        let mut score = 0.0;
        if !self.code.trim().is_empty() {
            score += 0.3;
        }
        if !self.description.trim().is_empty() {
            score += 0.3;
        }
        if !self.category.trim().is_empty() {
            score += 0.2;
        }
        if !self.code_type.trim().is_empty() {
            score += 0.2;
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_is_clamped() {
        let c = Classification::new("x", "1", "d").with_confidence(1.4);
        assert_eq!(c.confidence, 1.0);
        let c = Classification::new("x", "1", "d").with_confidence(-3.0);
        assert_eq!(c.confidence, 0.0);
    }

    #[test]
    fn test_completeness_weights() {
        let full = Classification::new("x", "541611", "Management Consulting")
            .with_code_type("NAICS")
            .with_category("Professional Services");
        assert!((full.completeness() - 1.0).abs() < 1e-9);

        let code_only = Classification::new("x", "541611", "");
        assert!((code_only.completeness() - 0.3).abs() < 1e-9);

        let blank = Classification::new("x", "  ", "");
        assert_eq!(blank.completeness(), 0.0);
    }

    #[test]
    fn test_instantiate_keeps_fields() {
        let template = Classification::new("t", "44-45", "Retail Trade")
            .with_category("Retail")
            .with_confidence(0.6)
            .with_updated_at(None);
        let copy = template.instantiate();
        assert_eq!(copy.code, template.code);
        assert_eq!(copy.category, "Retail");
        assert!(copy.updated_at.is_some());
    }

    #[test]
    fn test_serialize_skips_missing_timestamps() {
        let c = Classification::new("x", "1", "d").with_updated_at(None);
        let json = serde_json::to_value(&c).unwrap();
        assert!(json.get("updated_at").is_none());
        assert!(json.get("created_at").is_some());
    }
}

//! Degradation level

use serde::{Deserialize, Serialize};

/// Coarse severity label summarizing how far an outcome deviates from a
/// fully-trusted primary result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegradationLevel {
    /// Primary operation succeeded
    None,
    /// Cached or static reference data
    Partial,
    /// Heuristic or rule-based answer
    Minimal,
    /// Static safety-net response
    Fallback,
    /// Every strategy failed
    Critical,
}

impl DegradationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DegradationLevel::None => "none",
            DegradationLevel::Partial => "partial",
            DegradationLevel::Minimal => "minimal",
            DegradationLevel::Fallback => "fallback",
            DegradationLevel::Critical => "critical",
        }
    }

    pub fn is_degraded(&self) -> bool {
        !matches!(self, DegradationLevel::None)
    }
}

impl std::fmt::Display for DegradationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_severity() {
        assert!(DegradationLevel::None < DegradationLevel::Partial);
        assert!(DegradationLevel::Partial < DegradationLevel::Minimal);
        assert!(DegradationLevel::Minimal < DegradationLevel::Fallback);
        assert!(DegradationLevel::Fallback < DegradationLevel::Critical);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&DegradationLevel::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }

    #[test]
    fn test_is_degraded() {
        assert!(!DegradationLevel::None.is_degraded());
        assert!(DegradationLevel::Fallback.is_degraded());
    }
}

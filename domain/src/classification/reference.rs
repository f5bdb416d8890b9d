//! Static reference data entries

use super::Classification;
use crate::util::clamp_unit;
use serde::{Deserialize, Serialize};

/// A vetted classification stored under a lower-cased query fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub key: String,
    pub classification: Classification,
    pub confidence: f64,
}

impl ReferenceEntry {
    pub fn new(key: impl AsRef<str>, classification: Classification, confidence: f64) -> Self {
        Self {
            key: key.as_ref().trim().to_lowercase(),
            classification,
            confidence: clamp_unit(confidence),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_normalized() {
        let e = ReferenceEntry::new("  Retail ", Classification::new("r", "44-45", "Retail Trade"), 0.7);
        assert_eq!(e.key, "retail");
        assert!((e.confidence - 0.7).abs() < f64::EPSILON);
    }
}

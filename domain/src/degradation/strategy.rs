//! Fallback strategies and their trust ranking

use super::DegradationLevel;
use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One fallback technique in the ordered chain.
///
/// Declared from highest to lowest trust.
///
/// # Example
///
/// ```
/// use degrade_domain::{DegradationLevel, FallbackStrategy};
///
/// let s: FallbackStrategy = "fallback_data".parse().unwrap();
/// assert_eq!(s.confidence_factor(), 0.8);
/// assert_eq!(s.degradation_level(), DegradationLevel::Partial);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackStrategy {
    /// Previously cached primary result
    CachedResults,
    /// Static reference data
    FallbackData,
    /// Keyword heuristic templates
    PartialResults,
    /// Rule-based alternative scoring
    AlternativeLogic,
    /// Minimal static response (safety net)
    StaticResponse,
}

impl FallbackStrategy {
    /// All strategies in default chain order.
    pub const ALL: [FallbackStrategy; 5] = [
        FallbackStrategy::CachedResults,
        FallbackStrategy::FallbackData,
        FallbackStrategy::PartialResults,
        FallbackStrategy::AlternativeLogic,
        FallbackStrategy::StaticResponse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackStrategy::CachedResults => "cached_results",
            FallbackStrategy::FallbackData => "fallback_data",
            FallbackStrategy::PartialResults => "partial_results",
            FallbackStrategy::AlternativeLogic => "alternative_logic",
            FallbackStrategy::StaticResponse => "static_response",
        }
    }

    /// Confidence discount applied to the data quality this strategy yields.
    pub fn confidence_factor(&self) -> f64 {
        match self {
            FallbackStrategy::CachedResults => 0.9,
            FallbackStrategy::FallbackData => 0.8,
            FallbackStrategy::PartialResults => 0.7,
            FallbackStrategy::AlternativeLogic => 0.6,
            FallbackStrategy::StaticResponse => 0.4,
        }
    }

    pub fn degradation_level(&self) -> DegradationLevel {
        match self {
            FallbackStrategy::CachedResults | FallbackStrategy::FallbackData => {
                DegradationLevel::Partial
            }
            FallbackStrategy::PartialResults | FallbackStrategy::AlternativeLogic => {
                DegradationLevel::Minimal
            }
            FallbackStrategy::StaticResponse => DegradationLevel::Fallback,
        }
    }
}

impl std::fmt::Display for FallbackStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FallbackStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "cached_results" | "cache" | "cached" => Ok(FallbackStrategy::CachedResults),
            "fallback_data" | "static_data" => Ok(FallbackStrategy::FallbackData),
            "partial_results" | "partial" => Ok(FallbackStrategy::PartialResults),
            "alternative_logic" | "alternative" => Ok(FallbackStrategy::AlternativeLogic),
            "static_response" | "static" => Ok(FallbackStrategy::StaticResponse),
            _ => Err(DomainError::UnknownStrategy(s.to_string())),
        }
    }
}

/// What produced an outcome: the primary operation, a fallback strategy, or nothing.
///
/// Serialized as its label (`"primary"`, a strategy name, or `"none"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyUsed {
    Primary,
    Fallback(FallbackStrategy),
    None,
}

impl StrategyUsed {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyUsed::Primary => "primary",
            StrategyUsed::Fallback(strategy) => strategy.as_str(),
            StrategyUsed::None => "none",
        }
    }

    pub fn fallback(&self) -> Option<FallbackStrategy> {
        match self {
            StrategyUsed::Fallback(strategy) => Some(*strategy),
            _ => None,
        }
    }
}

impl std::fmt::Display for StrategyUsed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StrategyUsed {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(StrategyUsed::Primary),
            "none" => Ok(StrategyUsed::None),
            other => other.parse().map(StrategyUsed::Fallback),
        }
    }
}

impl Serialize for StrategyUsed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StrategyUsed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors_decrease_along_chain() {
        let factors: Vec<f64> = FallbackStrategy::ALL
            .iter()
            .map(|s| s.confidence_factor())
            .collect();
        assert_eq!(factors, vec![0.9, 0.8, 0.7, 0.6, 0.4]);
    }

    #[test]
    fn test_level_mapping() {
        use FallbackStrategy::*;
        assert_eq!(CachedResults.degradation_level(), DegradationLevel::Partial);
        assert_eq!(FallbackData.degradation_level(), DegradationLevel::Partial);
        assert_eq!(PartialResults.degradation_level(), DegradationLevel::Minimal);
        assert_eq!(AlternativeLogic.degradation_level(), DegradationLevel::Minimal);
        assert_eq!(StaticResponse.degradation_level(), DegradationLevel::Fallback);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(
            "cache".parse::<FallbackStrategy>().ok(),
            Some(FallbackStrategy::CachedResults)
        );
        assert_eq!(
            "Alternative-Logic".parse::<FallbackStrategy>().ok(),
            Some(FallbackStrategy::AlternativeLogic)
        );
        assert!("teleport".parse::<FallbackStrategy>().is_err());
    }

    #[test]
    fn test_strategy_used_labels() {
        assert_eq!(StrategyUsed::Primary.to_string(), "primary");
        assert_eq!(StrategyUsed::None.to_string(), "none");
        assert_eq!(
            StrategyUsed::Fallback(FallbackStrategy::FallbackData).to_string(),
            "fallback_data"
        );
    }

    #[test]
    fn test_strategy_used_serde_as_label() {
        let used = StrategyUsed::Fallback(FallbackStrategy::StaticResponse);
        let json = serde_json::to_string(&used).unwrap();
        assert_eq!(json, "\"static_response\"");
        let back: StrategyUsed = serde_json::from_str(&json).unwrap();
        assert_eq!(back, used);
    }
}

//! Quality estimation for candidate classifications

use crate::classification::Classification;
use crate::util::clamp_unit;
use chrono::{DateTime, TimeDelta, Utc};

/// Score returned when there is nothing to score.
pub const NEUTRAL_QUALITY: f64 = 0.5;

/// Computes a `[0, 1]` quality score for a classification.
///
/// The score is the average of the factors that apply:
///
/// | Factor | Applies when | Value |
/// |--------|--------------|-------|
/// | confidence | confidence > 0 | the classification's confidence |
/// | completeness | always | code 0.3 + description 0.3 + category 0.2 + type 0.2 |
/// | recency | `updated_at` is set | < 30 days → 1.0, < 90 days → 0.7, else 0.3 |
///
/// A missing classification scores [`NEUTRAL_QUALITY`].
#[derive(Debug, Clone, Copy, Default)]
pub struct QualityEstimator;

impl QualityEstimator {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, classification: Option<&Classification>) -> f64 {
        self.score_at(classification, Utc::now())
    }

    /// Score relative to an explicit clock reading.
    pub fn score_at(&self, classification: Option<&Classification>, now: DateTime<Utc>) -> f64 {
        let Some(c) = classification else {
            return NEUTRAL_QUALITY;
        };

        let mut factors = Vec::with_capacity(3);
        if c.confidence > 0.0 {
            factors.push(clamp_unit(c.confidence));
        }
        factors.push(c.completeness());
        if let Some(updated_at) = c.updated_at {
            factors.push(Self::recency(now - updated_at));
        }

        let score = factors.iter().sum::<f64>() / factors.len() as f64;
        clamp_unit(score)
    }

    fn recency(age: TimeDelta) -> f64 {
        if age < TimeDelta::days(30) {
            1.0
        } else if age < TimeDelta::days(90) {
            0.7
        } else {
            0.3
        }
    }
}

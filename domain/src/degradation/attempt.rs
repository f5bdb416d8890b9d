//! Per-strategy attempt record

use super::FallbackStrategy;
use crate::util::{clamp_unit, duration_ms};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One evaluated strategy in the chain.
///
/// Appended to the outcome in evaluation order and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackAttempt {
    pub strategy: FallbackStrategy,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "duration_ms", with = "duration_ms")]
    pub duration: Duration,
    /// Quality of the data the strategy yielded, 0 on failure
    pub data_quality: f64,
}

impl FallbackAttempt {
    pub fn succeeded(strategy: FallbackStrategy, duration: Duration, data_quality: f64) -> Self {
        Self {
            strategy,
            success: true,
            error: None,
            duration,
            data_quality: clamp_unit(data_quality),
        }
    }

    pub fn failed(strategy: FallbackStrategy, duration: Duration, error: impl Into<String>) -> Self {
        Self {
            strategy,
            success: false,
            error: Some(error.into()),
            duration,
            data_quality: 0.0,
        }
    }

    /// Whether this attempt ran longer than `timeout`.
    pub fn exceeded(&self, timeout: Duration) -> bool {
        self.duration > timeout
    }
}

//! Scripted primary classifier.
//!
//! The real primary classifier is an external service. This adapter plays a
//! fixed response so the engine can be exercised from the command line and
//! in tests.

use async_trait::async_trait;
use degrade_application::ports::primary_classifier::{ClassifierError, PrimaryClassifier};
use degrade_domain::{Classification, QueryPayload};
use std::time::Duration;
use tracing::debug;

/// What the scripted classifier answers.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptedResponse {
    Classify(Classification),
    Empty,
    Fail(ClassifierError),
}

impl ScriptedResponse {
    /// Map free-form failure text onto the closest error kind.
    pub fn fail_with(message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_lowercase();
        let error = if lower.contains("timeout") || lower.contains("timed out") {
            ClassifierError::Timeout(message)
        } else if lower.contains("connection") || lower.contains("refused") {
            ClassifierError::Connection(message)
        } else if lower.contains("unauthorized") || lower.contains("authentication") {
            ClassifierError::Authentication(message)
        } else if lower.contains("unavailable") {
            ClassifierError::Unavailable(message)
        } else {
            ClassifierError::Other(message)
        };
        ScriptedResponse::Fail(error)
    }
}

pub struct ScriptedClassifier {
    response: ScriptedResponse,
    latency: Duration,
}

impl ScriptedClassifier {
    pub fn new(response: ScriptedResponse) -> Self {
        Self {
            response,
            latency: Duration::ZERO,
        }
    }

    /// Answer with a NAICS classification for `code`.
    pub fn succeeding(code: impl Into<String>) -> Self {
        let code = code.into();
        let classification = Classification::new(
            format!("primary-{code}"),
            code.clone(),
            format!("Primary classification {code}"),
        )
        .with_code_type("NAICS")
        .with_category("Primary")
        .with_confidence(0.95);
        Self::new(ScriptedResponse::Classify(classification))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(ScriptedResponse::fail_with(message))
    }

    /// Delay every answer by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl PrimaryClassifier for ScriptedClassifier {
    async fn classify(
        &self,
        payload: &QueryPayload,
    ) -> Result<Option<Classification>, ClassifierError> {
        debug!("Scripted classifier called for '{}'", payload.query());
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        match &self.response {
            ScriptedResponse::Classify(c) => Ok(Some(c.instantiate())),
            ScriptedResponse::Empty => Ok(None),
            ScriptedResponse::Fail(e) => Err(e.clone()),
        }
    }
}

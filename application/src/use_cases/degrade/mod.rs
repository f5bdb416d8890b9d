//! Degrade use case
//!
//! Wraps a primary classification operation and, when it fails, walks the
//! configured fallback chain until one strategy answers.
//!
//! ```text
//! primary ──ok──▶ outcome (level none, confidence 1.0)
//!    │
//!   err / none / panic / deadline
//!    ▼
//! cached ▶ fallback data ▶ partial ▶ alternative ▶ static ──▶ outcome
//!                (first success wins)                  └─all failed─▶ critical
//! ```

mod last_successful;

pub use last_successful::LastSuccessfulData;

use crate::config::EngineParams;
use crate::fallback::{FallbackHandler, StrategyError, build_chain};
use crate::ports::alternative_scorer::AlternativeScorer;
use crate::ports::fallback_notifier::{FallbackNotifier, NoProgress};
use crate::ports::outcome_logger::{NoOutcomeLogger, OutcomeEvent, OutcomeLogger};
use crate::ports::primary_classifier::PrimaryClassifier;
use crate::ports::reference_store::ReferenceLookup;
use crate::ports::result_cache::ResultCache;
use chrono::Utc;
use degrade_domain::util::truncate_str;
use degrade_domain::{
    CachedEntry, Classification, DegradationOutcome, DegradationPolicy, DegradationStats,
    FallbackAttempt, QualityEstimator, QueryPayload,
};
use futures::FutureExt;
use serde_json::json;
use std::any::Any;
use std::fmt::Display;
use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Source label for entries committed through [`DegradationOrchestrator::cache_result`].
pub const PRIMARY_SOURCE: &str = "primary";

/// Graceful-degradation engine.
///
/// Shares only the result cache and reference store with other callers;
/// each `execute` call runs its strategies sequentially.
pub struct DegradationOrchestrator {
    policy: DegradationPolicy,
    params: EngineParams,
    cache: Arc<dyn ResultCache>,
    reference: Arc<dyn ReferenceLookup>,
    handlers: Vec<Box<dyn FallbackHandler>>,
    estimator: QualityEstimator,
    last_successful: LastSuccessfulData,
    logger: Arc<dyn OutcomeLogger>,
}

impl DegradationOrchestrator {
    /// Create an orchestrator whose chain follows `policy`.
    pub fn new(
        policy: DegradationPolicy,
        cache: Arc<dyn ResultCache>,
        reference: Arc<dyn ReferenceLookup>,
        scorer: Arc<dyn AlternativeScorer>,
    ) -> Self {
        let handlers = build_chain(
            &policy,
            Arc::clone(&cache),
            Arc::clone(&reference),
            scorer,
        );
        Self {
            policy,
            params: EngineParams::default(),
            cache,
            reference,
            handlers,
            estimator: QualityEstimator::new(),
            last_successful: LastSuccessfulData::new(),
            logger: Arc::new(NoOutcomeLogger),
        }
    }

    pub fn with_params(mut self, params: EngineParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn OutcomeLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Replace the handler chain. Attempts follow the order given here.
    pub fn with_handlers(mut self, handlers: Vec<Box<dyn FallbackHandler>>) -> Self {
        self.handlers = handlers;
        self
    }

    /// Execute with default (no-op) progress
    pub async fn execute<F, Fut, E>(&self, primary: F, payload: &QueryPayload) -> DegradationOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<Classification>, E>>,
        E: Display,
    {
        self.execute_with_progress(primary, payload, &NoProgress)
            .await
    }

    /// Execute against a [`PrimaryClassifier`] adapter.
    pub async fn execute_classifier(
        &self,
        classifier: &dyn PrimaryClassifier,
        payload: &QueryPayload,
        progress: &dyn FallbackNotifier,
    ) -> DegradationOutcome {
        self.execute_with_progress(|| classifier.classify(payload), payload, progress)
            .await
    }

    /// Execute with progress callbacks.
    ///
    /// Never fails: primary errors, empty results, panics and an elapsed
    /// deadline all route into the fallback chain, and an exhausted chain is
    /// reported as a critical outcome.
    pub async fn execute_with_progress<F, Fut, E>(
        &self,
        primary: F,
        payload: &QueryPayload,
        progress: &dyn FallbackNotifier,
    ) -> DegradationOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<Classification>, E>>,
        E: Display,
    {
        let started = Instant::now();
        let query = payload.query().to_string();

        let primary_error = match self.run_primary(primary).await {
            Ok(classification) => {
                let quality = self.estimator.score(Some(&classification));
                self.last_successful.set(classification.clone());
                let outcome = DegradationOutcome::primary(classification, quality)
                    .with_metadata("query", query)
                    .with_processing_time(started.elapsed());
                debug!("Primary operation succeeded (quality {:.2})", quality);
                return self.finish(outcome, "primary_success", progress);
            }
            Err(e) => e,
        };

        warn!("Primary operation failed: {}", primary_error);
        progress.on_primary_failed(&primary_error, self.handlers.len());

        let mut attempts = Vec::with_capacity(self.handlers.len());
        for (index, handler) in self.handlers.iter().enumerate() {
            let strategy = handler.strategy();
            progress.on_attempt_start(strategy, index);

            let attempt_started = Instant::now();
            let result = catch_unwind(AssertUnwindSafe(|| handler.attempt(payload)))
                .unwrap_or_else(|panic| {
                    Err(StrategyError::Panicked(self.truncated(&panic_message(&*panic))))
                });
            let elapsed = attempt_started.elapsed();

            match result {
                Ok(yielded) => {
                    let attempt = FallbackAttempt::succeeded(strategy, elapsed, yielded.data_quality);
                    progress.on_attempt_complete(&attempt);
                    attempts.push(attempt);

                    let classification = yielded.classification;
                    let quality = self.estimator.score(Some(&classification));
                    let attempt_count = attempts.len();
                    let mut outcome = DegradationOutcome::degraded(
                        strategy,
                        classification,
                        quality,
                        attempts,
                        &primary_error,
                        self.policy.fallback_timeout,
                    )
                    .with_metadata("query", query)
                    .with_metadata("primary_error", primary_error.clone())
                    .with_metadata("data_quality", yielded.data_quality)
                    .with_metadata("attempt_count", attempt_count);
                    if let Some(last) = self.last_successful.get() {
                        outcome = outcome.with_metadata("last_successful_code", last.code);
                    }

                    info!(
                        "Degraded via {} (level {}, confidence {:.3})",
                        strategy, outcome.degradation_level, outcome.confidence
                    );
                    return self.finish(
                        outcome.with_processing_time(started.elapsed()),
                        "degraded",
                        progress,
                    );
                }
                Err(e) => {
                    debug!("Strategy {} failed: {}", strategy, e);
                    let attempt = FallbackAttempt::failed(strategy, elapsed, e.to_string());
                    progress.on_attempt_complete(&attempt);
                    attempts.push(attempt);
                }
            }
        }

        warn!(
            "All {} fallback strategies failed for '{}'",
            attempts.len(),
            query
        );
        let attempt_count = attempts.len();
        let outcome = DegradationOutcome::exhausted(attempts)
            .with_metadata("query", query)
            .with_metadata("primary_error", primary_error)
            .with_metadata("attempt_count", attempt_count)
            .with_processing_time(started.elapsed());
        self.finish(outcome, "exhausted", progress)
    }

    /// Run the primary operation, folding every failure mode into error text.
    async fn run_primary<F, Fut, E>(&self, primary: F) -> Result<Classification, String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<Classification>, E>>,
        E: Display,
    {
        let future = catch_unwind(AssertUnwindSafe(primary)).map_err(|panic| {
            format!(
                "primary operation panicked: {}",
                self.truncated(&panic_message(&*panic))
            )
        })?;
        let guarded = AssertUnwindSafe(future).catch_unwind();

        let completed = match self.deadline() {
            Some(deadline) => tokio::time::timeout(deadline, guarded).await.map_err(|_| {
                format!(
                    "primary operation timeout after {} ms",
                    deadline.as_millis()
                )
            })?,
            None => guarded.await,
        };

        match completed {
            Ok(Ok(Some(classification))) => Ok(classification),
            Ok(Ok(None)) => Err("primary operation returned no result".to_string()),
            Ok(Err(e)) => Err(self.truncated(&e.to_string())),
            Err(panic) => Err(format!(
                "primary operation panicked: {}",
                self.truncated(&panic_message(&*panic))
            )),
        }
    }

    /// The primary deadline, when a Tokio runtime is available to enforce it.
    fn deadline(&self) -> Option<Duration> {
        let deadline = self.params.primary_timeout?;
        if tokio::runtime::Handle::try_current().is_err() {
            warn!(
                "No Tokio runtime: primary deadline of {} ms not enforced",
                deadline.as_millis()
            );
            return None;
        }
        Some(deadline)
    }

    fn finish(
        &self,
        outcome: DegradationOutcome,
        event_type: &'static str,
        progress: &dyn FallbackNotifier,
    ) -> DegradationOutcome {
        progress.on_outcome(&outcome);
        match serde_json::to_value(&outcome) {
            Ok(payload) => self.logger.log(OutcomeEvent::new(event_type, payload)),
            Err(e) => warn!("Failed to serialize outcome for logging: {}", e),
        }
        outcome
    }

    fn truncated(&self, text: &str) -> String {
        truncate_str(text, self.params.max_error_len).to_string()
    }

    /// Commit a primary result to the cache.
    ///
    /// Kept separate from `execute` so cache writes stay off the read path.
    pub fn cache_result(&self, query: &str, classification: Classification, confidence: f64) {
        let entry = CachedEntry::new(classification, confidence, Utc::now(), PRIMARY_SOURCE);
        self.cache.insert(query, entry);
        self.logger.log(OutcomeEvent::new(
            "cache_commit",
            json!({ "query": query, "confidence": confidence }),
        ));
        debug!("Cached result for '{}'", query);
    }

    /// Read-only snapshot for dashboards.
    pub fn stats(&self) -> DegradationStats {
        DegradationStats {
            static_entries: self.reference.len(),
            cached_entries: self.cache.len(),
            cache_ttl: self.cache.ttl(),
            enable_cached_results: self.policy.enable_cached_results,
            enable_fallback_data: self.policy.enable_fallback_data,
            enable_partial_results: self.policy.enable_partial_results,
            enable_alternative_logic: self.policy.enable_alternative_logic,
        }
    }

    pub fn set_last_successful(&self, classification: Classification) {
        self.last_successful.set(classification);
    }

    pub fn last_successful(&self) -> Option<Classification> {
        self.last_successful.get()
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

//! Progress reporting for fallback execution

use colored::Colorize;
use degrade_application::ports::fallback_notifier::FallbackNotifier;
use degrade_domain::{DegradationOutcome, FallbackAttempt, FallbackStrategy};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports fallback progress with a progress bar on stderr
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn chain_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(bar) = guard.as_ref()
        {
            f(bar);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackNotifier for ProgressReporter {
    fn on_primary_failed(&self, _error: &str, strategies: usize) {
        let bar = ProgressBar::new(strategies as u64);
        bar.set_style(Self::chain_style());
        bar.set_prefix("Fallback chain");
        bar.set_message("Primary failed, degrading...");

        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(bar);
        }
    }

    fn on_attempt_start(&self, strategy: FallbackStrategy, _index: usize) {
        self.with_bar(|bar| bar.set_message(format!("trying {}", strategy)));
    }

    fn on_attempt_complete(&self, attempt: &FallbackAttempt) {
        self.with_bar(|bar| {
            let status = if attempt.success {
                format!("{} {}", "v".green(), attempt.strategy)
            } else {
                format!("{} {}", "x".red(), attempt.strategy)
            };
            bar.set_message(status);
            bar.inc(1);
        });
    }

    fn on_outcome(&self, outcome: &DegradationOutcome) {
        let Ok(mut guard) = self.bar.lock() else {
            return;
        };
        if let Some(bar) = guard.take() {
            let message = if outcome.success {
                format!("answered by {}", outcome.strategy_used).green()
            } else {
                "all strategies failed".red()
            };
            bar.finish_with_message(message.to_string());
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl FallbackNotifier for SimpleProgress {
    fn on_primary_failed(&self, error: &str, strategies: usize) {
        eprintln!(
            "{} {} ({} strategies): {}",
            "->".cyan(),
            "Primary failed".bold(),
            strategies,
            error
        );
    }

    fn on_attempt_start(&self, _strategy: FallbackStrategy, _index: usize) {}

    fn on_attempt_complete(&self, attempt: &FallbackAttempt) {
        if attempt.success {
            eprintln!("  {} {}", "v".green(), attempt.strategy);
        } else {
            eprintln!(
                "  {} {} ({})",
                "x".red(),
                attempt.strategy,
                attempt.error.as_deref().unwrap_or("failed")
            );
        }
    }
}

//! Console output formatter for degradation outcomes

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use degrade_domain::{DegradationLevel, DegradationOutcome, DegradationStats};

/// Formats degradation outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete outcome
    pub fn format(outcome: &DegradationOutcome) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Classification Outcome"));
        output.push('\n');

        if let Some(query) = outcome.metadata.get("query").and_then(|v| v.as_str()) {
            output.push_str(&format!("{} {}\n", "Query:".cyan().bold(), query));
        }
        output.push_str(&format!(
            "{} {}\n",
            "Strategy:".cyan().bold(),
            outcome.strategy_used
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Level:".cyan().bold(),
            Self::level(outcome.degradation_level)
        ));
        output.push_str(&format!(
            "{} {:.3}   {} {:.3}\n",
            "Confidence:".cyan().bold(),
            outcome.confidence,
            "Quality:".cyan().bold(),
            outcome.quality_score
        ));
        output.push_str(&format!(
            "{} {} ms\n",
            "Time:".cyan().bold(),
            outcome.processing_time.as_millis()
        ));
        if let Some(error) = outcome.metadata.get("primary_error").and_then(|v| v.as_str()) {
            output.push_str(&format!("{} {}\n", "Primary error:".red().bold(), error));
        }

        output.push_str(&Self::section_header("Classification"));
        match &outcome.classification {
            Some(c) => {
                output.push_str(&format!("  {} {} ({})\n", "Code:".bold(), c.code, c.code_type));
                output.push_str(&format!("  {} {}\n", "Description:".bold(), c.description));
                if !c.category.is_empty() {
                    output.push_str(&format!("  {} {}\n", "Category:".bold(), c.category));
                }
                output.push_str(&format!("  {} {}\n", "Id:".bold(), c.id.dimmed()));
            }
            None => output.push_str(&format!("  {}\n", "No classification available".red())),
        }

        if !outcome.attempts.is_empty() {
            output.push_str(&Self::section_header("Fallback Attempts"));
            for (i, attempt) in outcome.attempts.iter().enumerate() {
                let line = if attempt.success {
                    format!(
                        "  {}. {} {} (quality {:.2}, {} ms)",
                        i + 1,
                        "v".green(),
                        attempt.strategy,
                        attempt.data_quality,
                        attempt.duration.as_millis()
                    )
                } else {
                    format!(
                        "  {}. {} {}: {}",
                        i + 1,
                        "x".red(),
                        attempt.strategy,
                        attempt.error.as_deref().unwrap_or("Unknown").dimmed()
                    )
                };
                output.push_str(&line);
                output.push('\n');
            }
        }

        if !outcome.warnings.is_empty() {
            output.push_str(&format!("\n{}\n", "Warnings:".yellow().bold()));
            for warning in &outcome.warnings {
                output.push_str(&format!("  * {}\n", warning));
            }
        }

        if !outcome.recommendations.is_empty() {
            output.push_str(&format!("\n{}\n", "Recommendations:".green().bold()));
            for rec in &outcome.recommendations {
                output.push_str(&format!("  * {}\n", rec));
            }
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(outcome: &DegradationOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the classification and level only (concise output)
    pub fn format_summary(outcome: &DegradationOutcome) -> String {
        let answer = match &outcome.classification {
            Some(c) => format!("{} {}", c.code.bold(), c.description),
            None => "no classification".red().to_string(),
        };
        format!(
            "{}\n{} {}  {} {}  {} {:.3}\n",
            answer,
            "level:".dimmed(),
            Self::level(outcome.degradation_level),
            "via:".dimmed(),
            outcome.strategy_used,
            "confidence:".dimmed(),
            outcome.confidence
        )
    }

    /// Format the statistics snapshot
    pub fn format_stats(stats: &DegradationStats) -> String {
        let flag = |enabled: bool| {
            if enabled {
                "enabled".green()
            } else {
                "disabled".red()
            }
        };

        let mut output = String::new();
        output.push_str(&Self::section_header("Engine Statistics"));
        output.push_str(&format!("  Static entries:     {}\n", stats.static_entries));
        output.push_str(&format!("  Cached entries:     {}\n", stats.cached_entries));
        output.push_str(&format!("  Cache TTL:          {} s\n", stats.cache_ttl.as_secs()));
        output.push_str(&format!(
            "  Cached results:     {}\n",
            flag(stats.enable_cached_results)
        ));
        output.push_str(&format!(
            "  Fallback data:      {}\n",
            flag(stats.enable_fallback_data)
        ));
        output.push_str(&format!(
            "  Partial results:    {}\n",
            flag(stats.enable_partial_results)
        ));
        output.push_str(&format!(
            "  Alternative logic:  {}\n",
            flag(stats.enable_alternative_logic)
        ));
        output
    }

    fn level(level: DegradationLevel) -> ColoredString {
        let label = level.as_str();
        match level {
            DegradationLevel::None => label.green().bold(),
            DegradationLevel::Partial => label.yellow().bold(),
            DegradationLevel::Minimal | DegradationLevel::Fallback => label.magenta().bold(),
            DegradationLevel::Critical => label.red().bold(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, outcome: &DegradationOutcome) -> String {
        Self::format(outcome)
    }

    fn format_json(&self, outcome: &DegradationOutcome) -> String {
        Self::format_json(outcome)
    }

    fn format_summary(&self, outcome: &DegradationOutcome) -> String {
        Self::format_summary(outcome)
    }
}

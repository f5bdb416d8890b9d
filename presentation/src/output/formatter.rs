//! Output formatter trait

use degrade_domain::{DegradationOutcome, OutputFormat};

/// Trait for formatting degradation outcomes
pub trait OutputFormatter {
    /// Format the complete outcome
    fn format(&self, outcome: &DegradationOutcome) -> String;

    /// Format as JSON
    fn format_json(&self, outcome: &DegradationOutcome) -> String;

    /// Format the classification and level only (concise output)
    fn format_summary(&self, outcome: &DegradationOutcome) -> String;

    /// Dispatch on `format`
    fn render(&self, outcome: &DegradationOutcome, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(outcome),
            OutputFormat::Summary => self.format_summary(outcome),
            OutputFormat::Json => self.format_json(outcome),
        }
    }
}

//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for degradation outcomes
///
/// This is a domain concept representing how an outcome should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full report: attempts, warnings, recommendations
    Full,
    /// One-screen summary (default)
    #[default]
    Summary,
    /// JSON output
    Json,
}

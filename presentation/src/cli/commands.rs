//! CLI command definitions

use clap::{Parser, ValueEnum};
use degrade_domain::{BusinessRecord, QueryPayload};
use std::path::PathBuf;

/// Output format for degradation outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with attempts, warnings and recommendations
    Full,
    /// Only the classification and degradation level
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for degrade_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => degrade_domain::OutputFormat::Full,
            OutputFormat::Summary => degrade_domain::OutputFormat::Summary,
            OutputFormat::Json => degrade_domain::OutputFormat::Json,
        }
    }
}

/// Parse a `key=value` pair.
fn parse_field(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// CLI arguments for classifier-degrade
#[derive(Parser, Debug)]
#[command(name = "classifier-degrade")]
#[command(author, version, about = "Graceful degradation for business classification queries")]
#[command(long_about = r#"
Classifier Degrade wraps a primary business classifier and, when it fails,
answers from an ordered chain of fallback strategies:

1. Cached results       previously committed primary answers
2. Fallback data        vetted static reference data
3. Partial results      keyword heuristic templates
4. Alternative logic    rule-based scoring
5. Static response      minimal "nonclassifiable" answer

Every run reports the degradation level, confidence, per-strategy attempts,
warnings and recommendations.

The primary classifier is simulated: it succeeds with --primary-code and
otherwise fails with the --fail-with text.

Configuration files are loaded from (in priority order):
1. DEGRADE_* environment variables
2. --config <path>     Explicit config file
3. ./degrade.toml      Project-level config
4. ~/.config/classifier-degrade/config.toml   Global config

Example:
  classifier-degrade "best retail shop downtown" --fail-with "connection refused"
  classifier-degrade "Joe's Diner" --primary-code 722511 -o json
  classifier-degrade --field name="Acme Software" -o full
"#)]
pub struct Cli {
    /// The business query to classify
    pub query: Option<String>,

    /// Primary classifier failure text (default: "primary classifier unavailable")
    #[arg(long, value_name = "ERROR", conflicts_with = "primary_code")]
    pub fail_with: Option<String>,

    /// Make the primary classifier succeed with this code
    #[arg(long, value_name = "CODE")]
    pub primary_code: Option<String>,

    /// Make the primary classifier succeed without a result
    #[arg(long, conflicts_with_all = ["primary_code", "fail_with"])]
    pub primary_empty: bool,

    /// Delay the primary classifier's answer (milliseconds)
    #[arg(long, value_name = "MS", default_value_t = 0)]
    pub primary_latency_ms: u64,

    /// Query as a field map entry (repeatable), e.g. --field name="Acme"
    #[arg(long = "field", value_name = "KEY=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    /// Query as structured business data with this company name
    #[arg(long, value_name = "NAME", conflicts_with = "fields")]
    pub company: Option<String>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and effective settings, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Print the engine statistics snapshot, then exit
    #[arg(long)]
    pub stats: bool,
}

impl Cli {
    /// Build the query payload from the chosen input shape.
    ///
    /// `--company` wins, then `--field` (with the positional query added as
    /// `query` when given), then the positional query as plain text.
    pub fn payload(&self) -> QueryPayload {
        if let Some(company) = &self.company {
            return QueryPayload::Business(BusinessRecord::new(company));
        }
        if !self.fields.is_empty() {
            let mut fields = self.fields.clone();
            if let Some(query) = &self.query {
                fields.push(("query".to_string(), query.clone()));
            }
            return QueryPayload::from_fields(fields);
        }
        QueryPayload::text(self.query.clone().unwrap_or_default())
    }

    /// Whether a query was supplied in any shape.
    pub fn has_input(&self) -> bool {
        self.query.is_some() || self.company.is_some() || !self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("classifier-degrade").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_text_query() {
        let cli = parse(&["best retail shop downtown", "--fail-with", "connection refused"]);
        assert_eq!(cli.payload(), QueryPayload::text("best retail shop downtown"));
        assert_eq!(cli.fail_with.as_deref(), Some("connection refused"));
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_field_payload() {
        let cli = parse(&["--field", "name=Acme Software", "--field", "city=Austin"]);
        let payload = cli.payload();
        assert!(matches!(payload, QueryPayload::Fields(_)));
        assert_eq!(payload.query(), "Acme Software");
    }

    #[test]
    fn test_field_requires_equals() {
        assert!(
            Cli::try_parse_from(["classifier-degrade", "--field", "nonsense"]).is_err()
        );
    }

    #[test]
    fn test_company_payload() {
        let cli = parse(&["--company", "Joe's Diner", "-o", "json", "-vv"]);
        assert_eq!(cli.payload().query(), "Joe's Diner");
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_primary_flags_conflict() {
        assert!(
            Cli::try_parse_from([
                "classifier-degrade",
                "x",
                "--primary-code",
                "722511",
                "--fail-with",
                "boom"
            ])
            .is_err()
        );
    }
}

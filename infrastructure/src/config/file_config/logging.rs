//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
///
/// # Example
///
/// ```toml
/// [logging]
/// file = "/var/log/classifier-degrade/engine.log"
/// outcome_log = "outcomes.jsonl"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Also write tracing output to this file (non-blocking appender)
    pub file: Option<PathBuf>,
    /// Append one JSON line per outcome to this file
    pub outcome_log: Option<PathBuf>,
    /// Default filter directive when neither `-v` nor `RUST_LOG` is given
    pub level: Option<String>,
}

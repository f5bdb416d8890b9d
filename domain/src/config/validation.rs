//! Configuration issues reported by validation.
//!
//! Validation never fails outright: it returns every detected issue with a
//! severity, and callers decide whether an [`Severity::Error`] is fatal.
//!
//! # Examples
//!
//! ```
//! use degrade_domain::{DegradationPolicy, config::has_errors};
//!
//! let policy = DegradationPolicy::default();
//! let issues = policy.validate();
//! assert!(!has_errors(&issues));
//! ```

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work as intended.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A threshold lies outside `[0, 1]`.
    ThresholdOutOfRange { field: String },
    /// The minimal threshold exceeds the partial threshold; partial results always fail.
    MinimalAboveThreshold,
    /// The minimal threshold exceeds 1.0; the static response safety net always fails.
    MinimalAboveOne,
    /// The same strategy appears more than once in the order.
    DuplicateStrategy { strategy: String },
    /// A strategy name could not be parsed.
    UnknownStrategy { value: String },
    /// A duration is zero.
    ZeroDuration { field: String },
    /// A keyword rule is unusable (e.g. no non-blank keywords).
    InvalidRule { index: usize },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }
}

/// Check whether any issues are errors (i.e. fatal).
pub fn has_errors(issues: &[ConfigIssue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}

//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown fallback strategy: {0}")]
    UnknownStrategy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_strategy_display() {
        let error = DomainError::UnknownStrategy("magic".to_string());
        assert_eq!(error.to_string(), "Unknown fallback strategy: magic");
    }
}

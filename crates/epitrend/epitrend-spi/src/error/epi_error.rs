//! Epitrend error types.
//!
//! Data-shape anomalies (unparseable labels, empty or constant series) are
//! recovered locally and never surface here. Errors are reserved for caller
//! mistakes: invalid analysis options and malformed input documents.

use thiserror::Error;

/// Epitrend errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EpiError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl EpiError {
    /// Shorthand for [`EpiError::InvalidParameter`].
    pub fn invalid(name: &str, reason: &str) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for epitrend operations.
pub type Result<T> = std::result::Result<T, EpiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let error = EpiError::InvalidParameter {
            name: "window".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter: window - must be at least 1"
        );
    }

    #[test]
    fn test_invalid_shorthand_matches_variant() {
        assert_eq!(
            EpiError::invalid("z_threshold", "must be positive"),
            EpiError::InvalidParameter {
                name: "z_threshold".to_string(),
                reason: "must be positive".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_display() {
        let error = EpiError::Parse("expected value at line 1 column 1".to_string());
        assert_eq!(
            error.to_string(),
            "Parse error: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(EpiError::Parse("bad".to_string()));
        assert!(!error.to_string().is_empty());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EpiError>();
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<()> = Err(EpiError::invalid("window", "zero"));
        assert!(matches!(
            result.unwrap_err(),
            EpiError::InvalidParameter { .. }
        ));
    }
}

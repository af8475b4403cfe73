//! Error types for configuration operations.

use thiserror::Error;

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Primary error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Field contained an invalid value.
    #[error("invalid configuration field")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Offending value when available.
        value: Option<String>,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// Configuration document could not be parsed.
    #[error("failed to parse configuration document")]
    Parse {
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, value: Option<String>, reason: &'static str) -> Self {
        Self::InvalidField {
            field,
            value,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn parse_error_keeps_source() {
        let source = match serde_json::from_str::<serde_json::Value>("{") {
            Ok(_) => return,
            Err(err) => err,
        };
        let err = ConfigError::Parse { source };
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "failed to parse configuration document");
    }

    #[test]
    fn invalid_helper_builds_field_variant() {
        let err = ConfigError::invalid("poll_interval_ms", Some("10".to_string()), "too_small");
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "poll_interval_ms",
                reason: "too_small",
                ..
            }
        ));
    }
}

//! Error types for the CLI

use keypad_calculator::config::ConfigError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Widget configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CliError::from(ConfigError::invalid_value(
            "notification_duration_ms",
            "must be greater than zero",
        ));
        assert!(err.to_string().starts_with("Configuration error"));
        assert!(err.to_string().contains("notification_duration_ms"));
    }

    #[test]
    fn test_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err = CliError::from(io);
        assert!(err.to_string().contains("I/O error"));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = CliError::invalid_argument("empty key");
        assert_eq!(err.to_string(), "Invalid argument: empty key");
    }

    #[test]
    fn test_debug_trait() {
        let err = CliError::invalid_argument("x");
        assert!(format!("{err:?}").contains("InvalidArgument"));
    }
}

//! Error types for the CLI

use keypad_calc::config::ConfigError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be loaded or written
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// `--strict` evaluation ended on the error display
    #[error("Evaluation failed: {expression}")]
    Evaluation {
        /// Expression that failed
        expression: String,
    },

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// Tracing subscriber could not be installed
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create an evaluation error
    #[must_use]
    pub fn evaluation(expression: impl Into<String>) -> Self {
        Self::Evaluation {
            expression: expression.into(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a logging error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

impl From<serde_yaml_ng::Error> for CliError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::Config(ConfigError::Parse(err))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_error() {
        let err = CliError::evaluation("5+");
        assert_eq!(err.to_string(), "Evaluation failed: 5+");
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = CliError::invalid_argument("no keys");
        assert!(err.to_string().contains("Invalid argument"));
    }

    #[test]
    fn test_logging_error() {
        let err = CliError::logging("already set");
        assert!(err.to_string().contains("Logging"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cli_err: CliError = io_err.into();
        assert!(cli_err.to_string().contains("I/O"));
    }

    #[test]
    fn test_yaml_error_from() {
        let yaml_err = serde_yaml_ng::from_str::<u8>("[").unwrap_err();
        let cli_err: CliError = yaml_err.into();
        assert!(cli_err.to_string().starts_with("Configuration error"));
    }
}

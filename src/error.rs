//! Unified error model
//!
//! Top-level error type of the hostaudit binary. External tool failures are
//! not errors: they are rendered as text by the command runner. Only
//! configuration, terminal and logging failures end up here.

use thiserror::Error;

/// Top-level error enum of the application
#[derive(Debug, Error)]
pub enum Error {
    // ========== Configuration ==========
    /// Profile document missing, unreadable or malformed
    #[error(transparent)]
    Config(#[from] hostaudit_common::BaseError),

    // ========== System ==========
    /// Writing results to the terminal failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Reading the interactive selection failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Log subscriber could not be installed
    #[error("Logging setup failed: {message}")]
    Logging { message: String },
}

/// Unified result type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a logging setup error
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostaudit_common::{BaseError, ConfigError};

    #[test]
    fn test_logging_error_creation() {
        let err = Error::logging("a global default trace dispatcher has already been set");
        assert!(matches!(err, Error::Logging { .. }));
    }

    #[test]
    fn test_config_error_message_names_the_file_once() {
        let err: Error = BaseError::from(ConfigError::FileNotFound {
            path: "package_manager.yml".to_string(),
        })
        .into();

        assert_eq!(
            err.to_string(),
            "Configuration error: Configuration file not found: package_manager.yml"
        );
    }
}

//! Configuration error types
//!
//! Everything that can go wrong while locating, reading or parsing the
//! package-manager profile document.

use thiserror::Error;

/// Configuration related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Path is not a regular file: {path}")]
    NotAFile { path: String },

    #[error("Failed to parse configuration: {source}")]
    ParseError {
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Missing required profile: {name}")]
    MissingProfile { name: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(source: serde_yaml::Error) -> Self {
        Self::ParseError { source }
    }
}

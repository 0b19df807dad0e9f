//! Top-level error enum
//!
//! Aggregates the error types of every module in this crate.

use super::ConfigError;
use thiserror::Error;

/// Top-level error enum for `hostaudit-common`
#[derive(Error, Debug)]
pub enum BaseError {
    // ========== Configuration ==========
    /// Profile document errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // ========== Generic ==========
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Unified result type
pub type Result<T> = std::result::Result<T, BaseError>;

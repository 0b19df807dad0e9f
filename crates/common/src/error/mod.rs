//! Error handling module
//!
//! One file per error concept.

mod base_error;
mod config_error;

pub use base_error::{BaseError, Result};
pub use config_error::ConfigError;

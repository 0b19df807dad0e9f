//! # hostaudit
//!
//! Host-level security audit aggregator: runs operating-system inspection
//! commands and third-party security scanners and prints what they report.

pub mod checks;
pub mod cli;
pub mod driver;
pub mod error;
pub mod installer;
pub mod interactive;
pub mod observability;
mod progress;

#[cfg(test)]
mod testing;

pub use checks::{AuditContext, Check, CheckKind, Platform};
pub use driver::{Actions, Driver};
pub use error::{Error, Result};

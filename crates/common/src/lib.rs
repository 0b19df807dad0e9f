//! Shared building blocks for hostaudit
//!
//! Package-manager profile loading, distribution detection and the command
//! runner every audit check goes through.

pub mod config;
pub mod distro;
pub mod error;
pub mod runner;

pub use config::{CommandTemplate, PackageManagerConfig, PackageProfile, load_package_profile};
pub use error::{BaseError, ConfigError, Result};
pub use runner::{
    CommandOutput, CommandRunner, CommandSpec, Privilege, SearchPath, SystemRunner, ToolLookup,
    render_output, run_command,
};

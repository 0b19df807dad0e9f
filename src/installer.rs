//! Package installation through the selected package-manager profile

use colored::*;
use hostaudit_common::{CommandRunner, CommandTemplate, PackageProfile, run_command};
use std::io::{self, Write};
use tracing::info;

/// Scanners installed by `--all-install`, by package name
pub const AUDIT_TOOLS: [&str; 4] = ["lynis", "chkrootkit", "rkhunter", "clamav"];

/// Installs and removes packages with the profile's command templates.
///
/// The tool name is appended to the template as a single argument and the
/// result is printed as-is; nothing verifies that the package manager
/// actually succeeded.
pub struct Installer<'a> {
    profile: &'a PackageProfile,
    runner: &'a dyn CommandRunner,
}

impl<'a> Installer<'a> {
    pub fn new(profile: &'a PackageProfile, runner: &'a dyn CommandRunner) -> Self {
        Self { profile, runner }
    }

    pub fn install(&self, tool: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "\n{}", format!("=== Installing {tool} ===").bright_cyan())?;
        self.apply(&self.profile.install, tool, out)
    }

    pub fn uninstall(&self, tool: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "\n{}", format!("=== Uninstalling {tool} ===").bright_cyan())?;
        self.apply(&self.profile.uninstall, tool, out)
    }

    fn apply(&self, template: &CommandTemplate, tool: &str, out: &mut dyn Write) -> io::Result<()> {
        let spec = template.with_argument(tool);
        info!("Package manager: {}", spec);
        writeln!(out, "{}", run_command(self.runner, &spec))
    }
}

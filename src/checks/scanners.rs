//! Third-party security scanners
//!
//! Lynis, chkrootkit, rkhunter and ClamAV are run with elevated privilege and
//! fixed flags. Their output is passed through untouched.

use super::{AuditContext, Check, section};
use hostaudit_common::CommandSpec;
use std::io::{self, Write};
use tracing::info;

/// An external scanner invocation
#[derive(Debug, Clone, Copy)]
pub struct ScannerCheck {
    label: &'static str,
    title: &'static str,
    display_name: &'static str,
    executable: &'static str,
    args: &'static [&'static str],
}

impl ScannerCheck {
    pub const LYNIS: Self = Self {
        label: "Run Lynis audit",
        title: "Running Lynis Audit",
        display_name: "Lynis",
        executable: "lynis",
        args: &["audit", "system"],
    };

    pub const CHKROOTKIT: Self = Self {
        label: "Run chkrootkit",
        title: "Running chkrootkit",
        display_name: "chkrootkit",
        executable: "chkrootkit",
        args: &[],
    };

    pub const RKHUNTER: Self = Self {
        label: "Run rkhunter",
        title: "Running rkhunter",
        display_name: "rkhunter",
        executable: "rkhunter",
        args: &["--check"],
    };

    /// Removes infected files as it finds them
    pub const CLAMAV: Self = Self {
        label: "Run ClamAV scan",
        title: "Running ClamAV Scan",
        display_name: "ClamAV",
        executable: "clamscan",
        args: &["-r", "/", "--infected", "--remove"],
    };

    fn command(&self, ctx: &AuditContext<'_>) -> CommandSpec {
        ctx.privilege
            .elevate(CommandSpec::new(self.executable).args(self.args.iter().copied()))
    }
}

impl Check for ScannerCheck {
    fn label(&self) -> &str {
        self.label
    }

    fn run(&self, ctx: &AuditContext<'_>, out: &mut dyn Write) -> io::Result<()> {
        section(out, self.title)?;

        if !ctx.lookup.exists(self.executable) {
            info!("{} not found on the search path", self.executable);
            writeln!(out, "{} is not installed.", self.display_name)?;
            return Ok(());
        }

        writeln!(out, "{}", ctx.run(&self.command(ctx)))
    }
}

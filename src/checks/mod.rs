//! Audit checks
//!
//! Each check is a self-contained procedure that inspects the host through
//! the [`AuditContext`] and writes its findings as plain text. The menu order
//! defined by [`CheckKind`] is shared by `--all`, the interactive selector
//! and the individual flags.

mod crontab;
mod network;
mod ping;
mod scanners;
mod ssh;
mod suid;

pub use crontab::CrontabCheck;
pub use network::NetworkCheck;
pub use ping::PingCheck;
pub use scanners::ScannerCheck;
pub use ssh::SshLogCheck;
pub use suid::SuidSgidCheck;

use colored::*;
use hostaudit_common::{CommandRunner, CommandSpec, Privilege, ToolLookup, run_command};
use std::io::{self, Write};
use strum::{EnumIter, IntoEnumIterator};

/// Operating system family the checks adapt to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }
}

/// Everything a check needs from the outside world
pub struct AuditContext<'a> {
    pub runner: &'a dyn CommandRunner,
    pub lookup: &'a dyn ToolLookup,
    pub privilege: Privilege,
    pub platform: Platform,
}

impl<'a> AuditContext<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        lookup: &'a dyn ToolLookup,
        privilege: Privilege,
        platform: Platform,
    ) -> Self {
        Self {
            runner,
            lookup,
            privilege,
            platform,
        }
    }

    /// Run a command and return its output or a rendered failure
    pub fn run(&self, spec: &CommandSpec) -> String {
        run_command(self.runner, spec)
    }
}

/// A single audit procedure
pub trait Check {
    /// Menu label
    fn label(&self) -> &str;

    /// Inspect the host and write the results to `out`
    fn run(&self, ctx: &AuditContext<'_>, out: &mut dyn Write) -> io::Result<()>;
}

/// The built-in checks, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum CheckKind {
    SshLogs,
    Network,
    SuidSgid,
    Crontab,
    Ping,
    Lynis,
    Chkrootkit,
    Rkhunter,
    Clamav,
}

impl CheckKind {
    /// Zero-based position in the menu
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn check(self) -> Box<dyn Check> {
        match self {
            Self::SshLogs => Box::new(SshLogCheck::default()),
            Self::Network => Box::new(NetworkCheck),
            Self::SuidSgid => Box::new(SuidSgidCheck::default()),
            Self::Crontab => Box::new(CrontabCheck::default()),
            Self::Ping => Box::new(PingCheck::default()),
            Self::Lynis => Box::new(ScannerCheck::LYNIS),
            Self::Chkrootkit => Box::new(ScannerCheck::CHKROOTKIT),
            Self::Rkhunter => Box::new(ScannerCheck::RKHUNTER),
            Self::Clamav => Box::new(ScannerCheck::CLAMAV),
        }
    }
}

/// All checks in menu order
pub fn menu() -> Vec<Box<dyn Check>> {
    CheckKind::iter().map(CheckKind::check).collect()
}

/// Print a check title (`=== title ===`) in yellow
pub(crate) fn section(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", format!("=== {title} ===").yellow())
}

/// Print a sub-section title in cyan
pub(crate) fn subsection(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", format!("=== {title} ===").cyan())
}

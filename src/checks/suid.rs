//! Filesystem scan for setuid/setgid binaries

use super::{AuditContext, Check, section};
use hostaudit_common::CommandSpec;
use std::io::{self, Write};
use std::path::PathBuf;

/// Recursive `find` for regular files with mode bits 04000 or 02000.
///
/// Walks the whole tree under `root` with no progress output; on a large
/// filesystem this takes a while.
#[derive(Debug, Clone)]
pub struct SuidSgidCheck {
    root: PathBuf,
}

impl Default for SuidSgidCheck {
    fn default() -> Self {
        Self::new("/")
    }
}

impl SuidSgidCheck {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn command(&self) -> CommandSpec {
        CommandSpec::new("find")
            .arg(self.root.display().to_string())
            .args(["-perm", "/6000", "-type", "f"])
            .discard_stderr()
    }
}

impl Check for SuidSgidCheck {
    fn label(&self) -> &str {
        "Check SUID/SGID files"
    }

    fn run(&self, ctx: &AuditContext<'_>, out: &mut dyn Write) -> io::Result<()> {
        section(out, "Checking for Files with SUID/SGID Bits Set")?;
        writeln!(out, "{}", ctx.run(&self.command()))
    }
}

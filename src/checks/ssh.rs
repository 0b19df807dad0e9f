//! SSH authentication log inspection

use super::{AuditContext, Check, Platform, section, subsection};
use hostaudit_common::{CommandSpec, render_output};
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

const FAILED_PASSWORD: &str = "Failed password";
const FAILED_LINES_SHOWN: usize = 20;
const LAST_LOGINS_SHOWN: usize = 10;

/// Failed password attempts, attempted usernames and recent logins
#[derive(Debug, Clone)]
pub struct SshLogCheck {
    candidates: Vec<PathBuf>,
}

impl Default for SshLogCheck {
    fn default() -> Self {
        Self::with_candidates(["/var/log/auth.log", "/var/log/secure"])
    }
}

impl SshLogCheck {
    /// Auth log locations, tried in order
    pub fn with_candidates<I, P>(candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// First existing candidate, or the last one so that the filter command
    /// reports the missing file itself
    fn auth_log(&self) -> Option<PathBuf> {
        self.candidates
            .iter()
            .find(|path| path.exists())
            .or_else(|| self.candidates.last())
            .cloned()
    }

    fn failed_attempts(&self, ctx: &AuditContext<'_>, log: &str) -> Result<Vec<String>, String> {
        let spec = CommandSpec::new("grep").arg(FAILED_PASSWORD).arg(log);
        match ctx.runner.execute(&spec) {
            Ok(output) if output.success() => {
                Ok(output.stdout.lines().map(String::from).collect())
            }
            // grep exits 1 without diagnostics when nothing matched
            Ok(output) if output.status == Some(1) && output.stderr.trim().is_empty() => {
                Ok(Vec::new())
            }
            other => Err(render_output(&spec, other)),
        }
    }
}

impl Check for SshLogCheck {
    fn label(&self) -> &str {
        "Check SSH logs"
    }

    fn run(&self, ctx: &AuditContext<'_>, out: &mut dyn Write) -> io::Result<()> {
        section(out, "Checking SSH Logs")?;

        if ctx.platform != Platform::Linux {
            writeln!(out, "SSH log checking is not supported on this platform.")?;
            return Ok(());
        }

        let Some(log) = self.auth_log() else {
            writeln!(out, "No authentication log locations configured.")?;
            return Ok(());
        };
        debug!("Reading SSH attempts from {}", log.display());

        let (failed, usernames) = match self.failed_attempts(ctx, &log.display().to_string()) {
            Ok(lines) => {
                let counts = count_usernames(&lines);
                (tail(&lines, FAILED_LINES_SHOWN), counts)
            }
            Err(message) => (vec![message], Vec::new()),
        };

        for line in &failed {
            writeln!(out, "{line}")?;
        }

        subsection(out, "SSH Username Requests")?;
        for (count, user) in &usernames {
            writeln!(out, "{count:>7} {user}")?;
        }

        subsection(out, "Last Login Attempts")?;
        let last = ctx.run(&CommandSpec::new("last").arg("-a"));
        for line in last.lines().take(LAST_LOGINS_SHOWN) {
            writeln!(out, "{line}")?;
        }

        Ok(())
    }
}

fn tail(lines: &[String], n: usize) -> Vec<String> {
    lines[lines.len().saturating_sub(n)..].to_vec()
}

/// Username targeted by a `Failed password for [invalid user] NAME from ...` line
fn attempted_username(line: &str) -> Option<&str> {
    let (_, rest) = line.split_once("Failed password for ")?;
    let rest = rest.strip_prefix("invalid user ").unwrap_or(rest);
    rest.split_whitespace().next()
}

/// Attempt counts per username, sorted by username
fn count_usernames(lines: &[String]) -> Vec<(usize, String)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for user in lines.iter().filter_map(|line| attempted_username(line)) {
        *counts.entry(user).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(user, count)| (count, user.to_string()))
        .collect()
}

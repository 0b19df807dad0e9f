//! Scheduled jobs of every local account

use super::{AuditContext, Check, section};
use hostaudit_common::CommandSpec;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Dumps `crontab -u <user> -l` for each account in the passwd database
#[derive(Debug, Clone)]
pub struct CrontabCheck {
    passwd: PathBuf,
}

impl Default for CrontabCheck {
    fn default() -> Self {
        Self::with_passwd("/etc/passwd")
    }
}

impl CrontabCheck {
    pub fn with_passwd(passwd: impl Into<PathBuf>) -> Self {
        Self {
            passwd: passwd.into(),
        }
    }
}

/// Account names: the first `:` field of every non-comment line
fn usernames(passwd: &str) -> Vec<&str> {
    passwd
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split(':').next())
        .filter(|name| !name.is_empty())
        .collect()
}

impl Check for CrontabCheck {
    fn label(&self) -> &str {
        "Check crontab entries"
    }

    fn run(&self, ctx: &AuditContext<'_>, out: &mut dyn Write) -> io::Result<()> {
        section(out, "Checking Crontab Entries for All Users")?;

        let content = match fs::read_to_string(&self.passwd) {
            Ok(content) => content,
            Err(e) => {
                warn!("Skipping crontab check, cannot read {}: {}", self.passwd.display(), e);
                writeln!(out, "Could not read {}: {}", self.passwd.display(), e)?;
                return Ok(());
            }
        };

        for user in usernames(&content) {
            let spec = CommandSpec::new("crontab")
                .args(["-u", user, "-l"])
                .discard_stderr();

            match ctx.runner.execute(&spec) {
                Ok(output) if output.success() && !output.stdout.trim().is_empty() => {
                    writeln!(out, "--- Crontab for {user} ---\n{}", output.stdout)?;
                }
                Ok(output) => debug!("No crontab for {} (status: {:?})", user, output.status),
                Err(e) => debug!("crontab for {} could not run: {}", user, e),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::Platform;
    use crate::testing::{RecordingRunner, StubLookup, output_of};
    use hostaudit_common::{CommandOutput, Privilege};

    const PASSWD: &str = "\
root:x:0:0:root:/root:/bin/bash
# local service accounts
daemon:x:1:1:daemon:/usr/sbin:/usr/sbin/nologin

alice:x:1000:1000:Alice:/home/alice:/bin/bash
";

    #[test]
    fn test_usernames_skip_comments_and_blank_lines() {
        assert_eq!(usernames(PASSWD), vec!["root", "daemon", "alice"]);
    }

    #[test]
    fn test_prints_only_non_empty_tables() {
        let dir = tempfile::tempdir().unwrap();
        let passwd = dir.path().join("passwd");
        fs::write(&passwd, PASSWD).unwrap();

        let runner = RecordingRunner::new()
            .respond(
                "crontab -u root -l",
                CommandOutput {
                    status: Some(0),
                    stdout: "0 3 * * * /usr/local/bin/backup\n".to_string(),
                    stderr: String::new(),
                },
            )
            .respond(
                "crontab -u daemon -l",
                CommandOutput {
                    status: Some(1),
                    stdout: String::new(),
                    stderr: "no crontab for daemon".to_string(),
                },
            )
            .respond(
                "crontab -u alice -l",
                CommandOutput {
                    status: Some(0),
                    stdout: "\n".to_string(),
                    stderr: String::new(),
                },
            );
        let lookup = StubLookup::none();
        let ctx = AuditContext::new(&runner, &lookup, Privilege::Sudo, Platform::Linux);

        let text = output_of(&CrontabCheck::with_passwd(&passwd), &ctx);

        assert_eq!(runner.calls().len(), 3);
        assert!(runner.calls().iter().all(|spec| spec.discards_stderr()));
        assert!(text.contains("--- Crontab for root ---\n0 3 * * * /usr/local/bin/backup"));
        assert!(!text.contains("daemon"));
        assert!(!text.contains("alice"));
        assert!(!text.contains("Error executing command"));
    }

    #[test]
    fn test_missing_passwd_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let runner = RecordingRunner::new();
        let lookup = StubLookup::none();
        let ctx = AuditContext::new(&runner, &lookup, Privilege::Sudo, Platform::Linux);

        let text = output_of(&CrontabCheck::with_passwd(dir.path().join("passwd")), &ctx);

        assert!(text.contains("Could not read"));
        assert!(runner.calls().is_empty());
    }
}

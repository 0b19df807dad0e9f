//! Command line interface
//!
//! Flags are not mutually exclusive: every flag given triggers its action.

use crate::checks::CheckKind;
use crate::driver::Actions;
use clap::Parser;
use hostaudit_common::config::DEFAULT_CONFIG_FILE;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hostaudit")]
#[command(version)]
#[command(about = "System security checker: runs host inspection commands and security scanners")]
pub struct Cli {
    /// Check SSH logs for suspicious activity
    #[arg(long)]
    pub ssh_logs: bool,

    /// Check active network connections and listening ports
    #[arg(long)]
    pub network: bool,

    /// Check for files with SUID/SGID bits set
    #[arg(long)]
    pub suid_sgid: bool,

    /// Check crontab entries for all users
    #[arg(long)]
    pub crontab: bool,

    /// Run Lynis audit
    #[arg(long)]
    pub lynis: bool,

    /// Run chkrootkit
    #[arg(long)]
    pub chkrootkit: bool,

    /// Run rkhunter
    #[arg(long)]
    pub rkhunter: bool,

    /// Run ClamAV scan (removes infected files)
    #[arg(long)]
    pub clamav: bool,

    /// Perform ping analysis
    #[arg(long)]
    pub ping: bool,

    /// Install specified tools (lynis, chkrootkit, rkhunter, clamav)
    #[arg(long, num_args = 1.., value_name = "TOOL")]
    pub install: Vec<String>,

    /// Uninstall specified tools (lynis, chkrootkit, rkhunter, clamav)
    #[arg(long, num_args = 1.., value_name = "TOOL")]
    pub uninstall: Vec<String>,

    /// Run all security checks
    #[arg(long)]
    pub all: bool,

    /// Install all required tools and run all security checks
    #[arg(long)]
    pub all_install: bool,

    /// Choose the checks to run from a menu
    #[arg(long)]
    pub interactive: bool,

    /// Package manager profile file (defaults to searching standard locations)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Write logs to <DIR>/hostaudit.log instead of stderr
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// The requested actions; logging and config flags are not actions
    pub fn actions(&self) -> Actions {
        let requested = [
            (self.ssh_logs, CheckKind::SshLogs),
            (self.network, CheckKind::Network),
            (self.suid_sgid, CheckKind::SuidSgid),
            (self.crontab, CheckKind::Crontab),
            (self.ping, CheckKind::Ping),
            (self.lynis, CheckKind::Lynis),
            (self.chkrootkit, CheckKind::Chkrootkit),
            (self.rkhunter, CheckKind::Rkhunter),
            (self.clamav, CheckKind::Clamav),
        ];

        Actions {
            install: self.install.clone(),
            uninstall: self.uninstall.clone(),
            all: self.all,
            all_install: self.all_install,
            interactive: self.interactive,
            checks: requested
                .into_iter()
                .filter_map(|(set, kind)| set.then_some(kind))
                .collect(),
        }
    }
}

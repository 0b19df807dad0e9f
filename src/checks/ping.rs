//! ICMP reachability of public resolvers

use super::{AuditContext, Check, section};
use hostaudit_common::CommandSpec;
use std::io::{self, Write};

/// Google public DNS
const DEFAULT_HOSTS: [&str; 2] = ["8.8.8.8", "8.8.4.4"];
const ECHO_COUNT: u32 = 4;

#[derive(Debug, Clone)]
pub struct PingCheck {
    hosts: Vec<String>,
}

impl Default for PingCheck {
    fn default() -> Self {
        Self {
            hosts: DEFAULT_HOSTS.iter().map(|h| h.to_string()).collect(),
        }
    }
}

impl Check for PingCheck {
    fn label(&self) -> &str {
        "Ping analysis"
    }

    fn run(&self, ctx: &AuditContext<'_>, out: &mut dyn Write) -> io::Result<()> {
        section(out, "Performing Ping Analysis")?;

        for host in &self.hosts {
            let spec = CommandSpec::new("ping")
                .arg("-c")
                .arg(ECHO_COUNT.to_string())
                .arg(host);
            writeln!(out, "--- Ping results for {host} ---\n{}", ctx.run(&spec))?;
        }

        Ok(())
    }
}

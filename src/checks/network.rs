//! Listening sockets and active connections

use super::{AuditContext, Check, section};
use hostaudit_common::CommandSpec;
use std::io::{self, Write};

/// Lists sockets with `netstat`, or `ss` when netstat is not installed
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkCheck;

impl NetworkCheck {
    fn command(ctx: &AuditContext<'_>) -> CommandSpec {
        let program = if ctx.lookup.exists("netstat") {
            "netstat"
        } else {
            "ss"
        };
        CommandSpec::new(program).arg("-tulpn")
    }
}

impl Check for NetworkCheck {
    fn label(&self) -> &str {
        "Check network connections"
    }

    fn run(&self, ctx: &AuditContext<'_>, out: &mut dyn Write) -> io::Result<()> {
        section(out, "Active Network Connections and Listening Ports")?;
        writeln!(out, "{}", ctx.run(&Self::command(ctx)))
    }
}

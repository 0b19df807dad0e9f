//! Command execution
//!
//! Every external tool is invoked through a [`CommandRunner`] with an explicit
//! program and argument vector. Nothing is ever handed to a shell.

mod lookup;
mod privilege;

pub use lookup::{SearchPath, ToolLookup};
pub use privilege::Privilege;

use std::fmt;
use std::io;
use std::process::{Command, Stdio};
use tracing::debug;

/// A single external invocation: program, arguments and stderr handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    discard_stderr: bool,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            discard_stderr: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Drop whatever the process writes to stderr (the `2>/dev/null` idiom).
    ///
    /// A failing exit status then no longer hides stdout: callers get the
    /// partial output instead of an error string.
    pub fn discard_stderr(mut self) -> Self {
        self.discard_stderr = true;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn discards_stderr(&self) -> bool {
        self.discard_stderr
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Executes a [`CommandSpec`] and waits for it to finish.
pub trait CommandRunner {
    fn execute(&self, spec: &CommandSpec) -> io::Result<CommandOutput>;
}

/// Runs commands on the local host with `std::process::Command`.
///
/// Blocking, unbounded and without timeout: output is buffered in full and
/// only returned once the child exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn execute(&self, spec: &CommandSpec) -> io::Result<CommandOutput> {
        debug!("Executing: {}", spec);

        let mut command = Command::new(spec.program());
        command.args(spec.arguments()).stdin(Stdio::inherit());
        if spec.discards_stderr() {
            command.stderr(Stdio::null());
        }

        let output = command.output()?;
        let result = CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        debug!("Finished: {} (status: {:?})", spec, result.status);
        Ok(result)
    }
}

/// Run a command and flatten the outcome into printable text.
///
/// Success yields stdout. A non-zero exit yields a message carrying the
/// command line and its stderr; a process that could not be started yields
/// the same message with the spawn error instead. Failures are never
/// propagated to the caller.
pub fn run_command(runner: &dyn CommandRunner, spec: &CommandSpec) -> String {
    render_output(spec, runner.execute(spec))
}

/// Flatten an already obtained execution result, see [`run_command`]
pub fn render_output(spec: &CommandSpec, result: io::Result<CommandOutput>) -> String {
    match result {
        Ok(output) if output.success() => output.stdout,
        Ok(output) if spec.discards_stderr() => output.stdout,
        Ok(output) => failure_message(spec, &output.stderr),
        Err(e) => failure_message(spec, &e.to_string()),
    }
}

fn failure_message(spec: &CommandSpec, detail: &str) -> String {
    format!("Error executing command '{spec}': {detail}")
}

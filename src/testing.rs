//! Test doubles for the command runner, the search path and checks

use crate::checks::{AuditContext, Check};
use hostaudit_common::{CommandOutput, CommandRunner, CommandSpec, ToolLookup};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;

/// Records every command and replays canned outputs keyed by command line.
/// Unknown commands succeed with empty output.
#[derive(Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<CommandSpec>>,
    responses: HashMap<String, CommandOutput>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, command: &str, output: CommandOutput) -> Self {
        self.responses.insert(command.to_string(), output);
        self
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.borrow().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(ToString::to_string).collect()
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|spec| spec.program().to_string())
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn execute(&self, spec: &CommandSpec) -> io::Result<CommandOutput> {
        self.calls.borrow_mut().push(spec.clone());
        Ok(self
            .responses
            .get(&spec.to_string())
            .cloned()
            .unwrap_or(CommandOutput {
                status: Some(0),
                ..Default::default()
            }))
    }
}

/// Search path that only knows the given tool names
pub struct StubLookup {
    installed: HashSet<String>,
}

impl StubLookup {
    pub fn none() -> Self {
        Self::with(&[])
    }

    pub fn with(tools: &[&str]) -> Self {
        Self {
            installed: tools.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl ToolLookup for StubLookup {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        self.installed
            .contains(name)
            .then(|| PathBuf::from("/usr/bin").join(name))
    }
}

/// Check that appends its id to a shared log when run
pub struct RecordingCheck {
    id: usize,
    label: String,
    log: Rc<RefCell<Vec<usize>>>,
}

impl Check for RecordingCheck {
    fn label(&self) -> &str {
        &self.label
    }

    fn run(&self, _ctx: &AuditContext<'_>, out: &mut dyn Write) -> io::Result<()> {
        self.log.borrow_mut().push(self.id);
        writeln!(out, "ran {}", self.label)
    }
}

/// A menu of `len` recording checks with ids 1..=len, plus their shared log
pub fn recording_menu(len: usize) -> (Vec<Box<dyn Check>>, Rc<RefCell<Vec<usize>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let menu = (1..=len)
        .map(|id| {
            Box::new(RecordingCheck {
                id,
                label: format!("check {id}"),
                log: Rc::clone(&log),
            }) as Box<dyn Check>
        })
        .collect();
    (menu, log)
}

/// Run a check against `ctx` and capture what it printed
pub fn output_of(check: &dyn Check, ctx: &AuditContext<'_>) -> String {
    let mut buffer = Vec::new();
    check.run(ctx, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

//! Command templates as written in the profile document

use crate::error::ConfigError;
use crate::runner::CommandSpec;
use serde::Deserialize;
use std::fmt;

/// A program plus its leading arguments, e.g. `apt-get install -y`.
///
/// Written either as a whitespace-separated string or as a list of
/// arguments; the list form is needed when an argument contains spaces.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawTemplate")]
pub struct CommandTemplate {
    program: String,
    args: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTemplate {
    Line(String),
    Argv(Vec<String>),
}

impl TryFrom<RawTemplate> for CommandTemplate {
    type Error = ConfigError;

    fn try_from(raw: RawTemplate) -> Result<Self, Self::Error> {
        let parts: Vec<String> = match raw {
            RawTemplate::Line(line) => line.split_whitespace().map(String::from).collect(),
            RawTemplate::Argv(argv) => argv,
        };

        let mut parts = parts.into_iter();
        match parts.next() {
            Some(program) if !program.trim().is_empty() => Ok(Self {
                program,
                args: parts.collect(),
            }),
            _ => Err(ConfigError::InvalidValue {
                field: "template".to_string(),
                value: "empty command".to_string(),
            }),
        }
    }
}

impl CommandTemplate {
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Append one trailing argument: `{template} {argument}`
    pub fn with_argument(&self, argument: &str) -> CommandSpec {
        CommandSpec::new(&self.program)
            .args(self.args.iter().cloned())
            .arg(argument)
    }
}

impl fmt::Display for CommandTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

//! Privilege elevation for scanners that need root

use super::CommandSpec;

/// How an elevated command is launched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    /// Already running as root, commands run as-is
    Root,
    /// Commands are prefixed with `sudo`
    Sudo,
}

impl Privilege {
    /// Inspect the effective user id of this process
    #[cfg(unix)]
    pub fn detect() -> Self {
        if nix::unistd::Uid::effective().is_root() {
            Self::Root
        } else {
            Self::Sudo
        }
    }

    #[cfg(not(unix))]
    pub fn detect() -> Self {
        Self::Sudo
    }

    pub fn elevate(self, spec: CommandSpec) -> CommandSpec {
        match self {
            Self::Root => spec,
            Self::Sudo => {
                let mut elevated = CommandSpec::new("sudo")
                    .arg(spec.program())
                    .args(spec.arguments().iter().cloned());
                if spec.discards_stderr() {
                    elevated = elevated.discard_stderr();
                }
                elevated
            }
        }
    }
}

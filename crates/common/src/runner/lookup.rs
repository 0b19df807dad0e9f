//! Search-path lookup for external tools

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Resolves a tool name to an executable, the way a shell would.
pub trait ToolLookup {
    fn locate(&self, name: &str) -> Option<PathBuf>;

    fn exists(&self, name: &str) -> bool {
        self.locate(name).is_some()
    }
}

/// Walks the directories of a `PATH`-style list in order.
#[derive(Debug, Clone)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    /// Use the `PATH` of the current process
    pub fn from_env() -> Self {
        Self::from_path_var(env::var_os("PATH").unwrap_or_default())
    }

    pub fn from_path_var(path: impl Into<OsString>) -> Self {
        Self {
            dirs: env::split_paths(&path.into()).collect(),
        }
    }
}

impl ToolLookup for SearchPath {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        if name.contains(std::path::MAIN_SEPARATOR) {
            let path = PathBuf::from(name);
            return is_executable(&path).then_some(path);
        }

        self.dirs
            .iter()
            .map(|dir| dir.join(name))
            .find(|candidate| is_executable(candidate))
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

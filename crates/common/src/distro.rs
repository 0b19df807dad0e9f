//! Distribution identifier detection
//!
//! Reads the `ID` field of `/etc/os-release`. Hosts without that file, and
//! non-Linux targets, have no identifier and get the `default` profile.

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Lowercase identifier of the running distribution, e.g. `ubuntu`
pub fn detect_distribution() -> Option<String> {
    if !cfg!(target_os = "linux") {
        debug!("Not a Linux host, no distribution identifier");
        return None;
    }
    read_distribution(Path::new(OS_RELEASE_PATH))
}

/// Read the identifier from an os-release formatted file
pub fn read_distribution(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => parse_os_release_id(&content),
        Err(e) => {
            warn!("Could not read {}: {}", path.display(), e);
            None
        }
    }
}

/// Extract `ID=` from os-release content, quotes stripped and lowercased
pub fn parse_os_release_id(content: &str) -> Option<String> {
    content
        .lines()
        .filter_map(|line| line.trim().split_once('='))
        .find(|(key, _)| *key == "ID")
        .map(|(_, value)| value.trim().trim_matches('"').trim_matches('\'').to_lowercase())
        .filter(|id| !id.is_empty())
}

//! Package-manager profile configuration
//!
//! The profile document maps lowercase distribution identifiers to the
//! install/uninstall command templates of that distribution's package
//! manager. A `default` entry is mandatory and is used for any
//! distribution that is not listed.
//!
//! ```yaml
//! ubuntu:
//!   install: apt-get install -y
//!   uninstall: apt-get remove -y
//! arch:
//!   install: [pacman, -S, --noconfirm]
//!   uninstall: [pacman, -R, --noconfirm]
//! default:
//!   install: apt-get install -y
//!   uninstall: apt-get remove -y
//! ```

mod template;

pub use template::CommandTemplate;

use crate::error::{ConfigError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Name of the mandatory fallback profile
pub const DEFAULT_PROFILE: &str = "default";

/// File name looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "package_manager.yml";

/// System-wide location tried after the working directory
pub const SYSTEM_CONFIG_FILE: &str = "/etc/hostaudit/package_manager.yml";

/// Install/uninstall templates of one package manager
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageProfile {
    pub install: CommandTemplate,
    pub uninstall: CommandTemplate,
}

/// The whole profile document, keyed by distribution identifier
#[derive(Debug, Clone)]
pub struct PackageManagerConfig {
    profiles: BTreeMap<String, PackageProfile>,
}

impl PackageManagerConfig {
    /// Load the document from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(ConfigError::FileNotFound {
                path: path_ref.display().to_string(),
            }
            .into());
        }

        if !path_ref.is_file() {
            return Err(ConfigError::NotAFile {
                path: path_ref.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path_ref)?;
        Ok(Self::from_yaml(&content)?)
    }

    /// Parse the document from a YAML string
    pub fn from_yaml(content: &str) -> std::result::Result<Self, ConfigError> {
        let raw: BTreeMap<String, PackageProfile> = serde_yaml::from_str(content)?;
        let profiles: BTreeMap<String, PackageProfile> = raw
            .into_iter()
            .map(|(id, profile)| (id.to_lowercase(), profile))
            .collect();

        if !profiles.contains_key(DEFAULT_PROFILE) {
            return Err(ConfigError::MissingProfile {
                name: DEFAULT_PROFILE.to_string(),
            });
        }

        Ok(Self { profiles })
    }

    /// Profile for a distribution, or the `default` profile when the
    /// distribution is unknown or not listed
    pub fn profile_for(&self, distro: Option<&str>) -> &PackageProfile {
        distro
            .map(str::to_lowercase)
            .and_then(|id| self.profiles.get(&id))
            .unwrap_or_else(|| self.default_profile())
    }

    pub fn default_profile(&self) -> &PackageProfile {
        // from_yaml refuses documents without a default entry
        &self.profiles[DEFAULT_PROFILE]
    }

    /// Distribution identifiers listed in the document
    pub fn distributions(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Find the profile document with fallback locations
    ///
    /// An explicitly provided path must exist. The default file name is
    /// searched in the working directory first, then in
    /// [`SYSTEM_CONFIG_FILE`].
    pub fn locate(provided: &Path) -> Result<PathBuf> {
        if provided != Path::new(DEFAULT_CONFIG_FILE) {
            if provided.exists() {
                info!("Using provided config file: {:?}", provided);
                return Ok(provided.to_path_buf());
            }
            return Err(ConfigError::FileNotFound {
                path: provided.display().to_string(),
            }
            .into());
        }

        let fallback_paths = [
            PathBuf::from(DEFAULT_CONFIG_FILE),
            PathBuf::from(SYSTEM_CONFIG_FILE),
        ];

        for path in &fallback_paths {
            if path.exists() {
                info!("Found config file: {:?}", path);
                return Ok(path.clone());
            }
            info!("Config not found at: {:?}", path);
        }

        Err(ConfigError::FileNotFound {
            path: fallback_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }
        .into())
    }
}

/// Load the document at `path` and select the profile of the running
/// distribution
pub fn load_package_profile(path: &Path) -> Result<PackageProfile> {
    let config = PackageManagerConfig::from_file(path)?;
    let distro = crate::distro::detect_distribution();
    if let Some(id) = distro.as_deref()
        && !config.distributions().any(|listed| listed == id)
    {
        info!(
            "No profile for distribution '{}' (listed: {}), using '{}'",
            id,
            config.distributions().collect::<Vec<_>>().join(", "),
            DEFAULT_PROFILE
        );
    }
    let profile = config.profile_for(distro.as_deref()).clone();

    info!(
        "Selected package manager profile for {} (install: {}, uninstall: {})",
        distro.as_deref().unwrap_or("unknown distribution"),
        profile.install,
        profile.uninstall
    );

    Ok(profile)
}

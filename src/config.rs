//! # Configuration Resolver
//!
//! This module maps a short example identifier (for example `01_trimesh`) to
//! the remote address and local path of its linked sub-repository.
//!
//! ## Layers
//!
//! A run's [`Config`] is assembled from, lowest precedence first:
//!
//! 1.  Built-in defaults ([`DEFAULT_HOST`], [`DEFAULT_PREFIX`]). The
//!     organization has no default.
//! 2.  A YAML settings file, `.example-submodules.yaml` in the repository root
//!     unless another path is given.
//! 3.  Environment variables and command-line flags, which `clap` has already
//!     merged into a [`Settings`] value by the time it reaches this module.
//!
//! Once built, a `Config` is static for the run and [`Config::resolve`] is a
//! pure function of it and the example name.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Hosting service used when no host is configured.
pub const DEFAULT_HOST: &str = "https://github.com";

/// Naming convention for derived repositories: `<prefix>-<name>`.
pub const DEFAULT_PREFIX: &str = "vuer-example";

/// Settings file looked up in the repository root.
pub const DEFAULT_SETTINGS_FILENAME: &str = ".example-submodules.yaml";

/// One layer of optional settings, as read from the settings file or the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Base URL of the hosting service, e.g. `https://github.com`.
    #[serde(default)]
    pub host: Option<String>,
    /// Organization (or user) that owns the example repositories.
    #[serde(default)]
    pub org: Option<String>,
    /// Prefix shared by every derived repository name.
    #[serde(default)]
    pub prefix: Option<String>,
}

impl Settings {
    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merged_with(self, other: Settings) -> Settings {
        Settings {
            host: other.host.or(self.host),
            org: other.org.or(self.org),
            prefix: other.prefix.or(self.prefix),
        }
    }
}

/// Parse settings from a YAML string. An empty document yields empty settings.
pub fn parse(yaml_content: &str) -> Result<Settings> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml_content)?;
    if value.is_null() {
        return Ok(Settings::default());
    }
    Ok(serde_yaml::from_value(value)?)
}

/// Read and parse a settings file.
pub fn from_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| Error::Configuration {
        message: format!("cannot read settings file {}: {}", path.display(), e),
        hint: None,
    })?;
    parse(&content).map_err(|e| Error::Configuration {
        message: format!("invalid settings file {}: {}", path.display(), e),
        hint: Some("allowed keys are host, org and prefix".to_string()),
    })
}

/// Load the settings file layer.
///
/// An explicitly named file must exist. The default file is optional.
pub fn load_settings(explicit: Option<&Path>, root: &Path) -> Result<Settings> {
    match explicit {
        Some(path) => from_file(path),
        None => {
            let default_path = root.join(DEFAULT_SETTINGS_FILENAME);
            if default_path.is_file() {
                log::debug!("loading settings from {}", default_path.display());
                from_file(&default_path)
            } else {
                Ok(Settings::default())
            }
        }
    }
}

/// Remote location and local path derived for one example name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub derived_repo_name: String,
    pub remote_url: String,
    pub local_path: PathBuf,
}

/// Static configuration for a registration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub org: String,
    pub prefix: String,
}

impl Config {
    /// Create a configuration on the default host.
    pub fn new(org: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            org: org.into(),
            prefix: prefix.into(),
        }
    }

    /// Replace the hosting service base URL.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Build a configuration from layered settings, filling in defaults.
    ///
    /// An unset organization becomes the empty string and is rejected later by
    /// [`Config::validate`].
    pub fn from_settings(settings: Settings) -> Self {
        Self {
            host: settings.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            org: settings.org.unwrap_or_default(),
            prefix: settings
                .prefix
                .unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
        }
    }

    /// Check the fatal preconditions on the configuration itself.
    pub fn validate(&self) -> Result<()> {
        if self.org.trim().is_empty() {
            return Err(Error::Configuration {
                message: "organization identifier is not set".to_string(),
                hint: Some(
                    "pass --org, set EXAMPLE_SUBMODULES_ORG, or add `org:` to .example-submodules.yaml"
                        .to_string(),
                ),
            });
        }
        if self.org.contains('/') {
            return Err(Error::Configuration {
                message: format!("organization '{}' must not contain '/'", self.org),
                hint: None,
            });
        }
        if self.prefix.trim().is_empty() {
            return Err(Error::Configuration {
                message: "repository name prefix is empty".to_string(),
                hint: Some("pass --prefix or add `prefix:` to the settings file".to_string()),
            });
        }
        if self.prefix.starts_with('.') || self.prefix.contains('/') {
            return Err(Error::Configuration {
                message: format!("prefix '{}' is not a valid directory name", self.prefix),
                hint: None,
            });
        }

        let host = url::Url::parse(&self.host).map_err(|e| Error::Configuration {
            message: format!("host '{}' is not a valid URL: {}", self.host, e),
            hint: Some("use a base URL such as https://github.com".to_string()),
        })?;
        if host.cannot_be_a_base() {
            return Err(Error::Configuration {
                message: format!("host '{}' cannot be used as a base URL", self.host),
                hint: None,
            });
        }

        Ok(())
    }

    /// Derived repository name for `name`: `<prefix>-<name>`.
    pub fn derived_repo_name(&self, name: &str) -> String {
        format!("{}-{}", self.prefix, name)
    }

    /// Map an example name to its remote URL and local path.
    pub fn resolve(&self, name: &str) -> Resolved {
        let derived_repo_name = self.derived_repo_name(name);
        let remote_url = format!(
            "{}/{}/{}.git",
            self.host.trim_end_matches('/'),
            self.org,
            derived_repo_name
        );
        Resolved {
            local_path: PathBuf::from(&derived_repo_name),
            remote_url,
            derived_repo_name,
        }
    }
}

//! Run configuration.
//!
//! Loaded from a TOML file; every section is optional and falls back to
//! the defaults below. Credentials never live in the file: they are read
//! from `CROSSCHECK_USERNAME` / `CROSSCHECK_PASSWORD`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crosscheck_core::errors::{config_error, Result};
use crosscheck_core::report::Justify;
use crosscheck_core::types::Sensitive;
use crosscheck_core::DiffFilter;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "crosscheck.toml";
pub const ENV_USERNAME: &str = "CROSSCHECK_USERNAME";
pub const ENV_PASSWORD: &str = "CROSSCHECK_PASSWORD";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrosscheckConfig {
    pub backends: BackendsConfig,
    pub transport: TransportConfig,
    pub run: RunConfig,
    pub filter: DiffFilter,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackendsConfig {
    pub left: BackendConfig,
    pub right: BackendConfig,
}

impl Default for BackendsConfig {
    fn default() -> Self {
        Self {
            left: BackendConfig::labelled("API"),
            right: BackendConfig::labelled("WM"),
        }
    }
}

/// One side of the comparison
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    pub label: String,
    #[serde(default)]
    pub base_url: String,
    /// POST to `<base_url>/<operation>` rather than `<base_url>`
    #[serde(default = "default_append_operation")]
    pub append_operation: bool,
}

impl BackendConfig {
    fn labelled(label: &str) -> Self {
        Self {
            label: label.to_string(),
            base_url: String::new(),
            append_operation: true,
        }
    }

    /// Endpoint for `operation`
    pub fn endpoint(&self, operation: &str) -> String {
        if self.append_operation {
            format!("{}/{}", self.base_url.trim_end_matches('/'), operation)
        } else {
            self.base_url.clone()
        }
    }
}

fn default_append_operation() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransportConfig {
    pub timeout_secs: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

impl TransportConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Pause after each pair of backend calls
    pub delay_ms: u64,
    pub scenario_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            delay_ms: 5000,
            scenario_dir: PathBuf::from("scenarios"),
            output_dir: PathBuf::from("results"),
        }
    }
}

impl RunConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub justify: Justify,
}

impl CrosscheckConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| config_error(format!("invalid configuration: {}", e)))
    }

    /// Read and parse a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| config_error(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Check the values a run cannot start without
    pub fn validate(&self) -> Result<()> {
        for (side, backend) in [("left", &self.backends.left), ("right", &self.backends.right)] {
            if backend.base_url.trim().is_empty() {
                return Err(config_error(format!(
                    "backends.{}.base_url is not set",
                    side
                )));
            }
            reqwest::Url::parse(&backend.base_url).map_err(|e| {
                config_error(format!(
                    "backends.{}.base_url '{}' is not a valid URL: {}",
                    side, backend.base_url, e
                ))
            })?;
            if backend.label.trim().is_empty() {
                return Err(config_error(format!("backends.{}.label is empty", side)));
            }
        }
        if self.transport.timeout_secs == 0 {
            return Err(config_error("transport.timeout_secs must be positive"));
        }
        Ok(())
    }
}

/// Basic-auth credentials shared by both backends
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: Sensitive<String>,
}

impl Credentials {
    /// Read credentials from the process environment, if a username is set
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let username = lookup(ENV_USERNAME).filter(|u| !u.is_empty())?;
        let password = lookup(ENV_PASSWORD).unwrap_or_default();
        Some(Self {
            username,
            password: Sensitive::new(password),
        })
    }
}

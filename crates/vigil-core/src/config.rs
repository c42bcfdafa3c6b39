//! vigil.toml configuration parser.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{ConfigError, ConfigResult};

/// One configured health check.
///
/// Check names are used as metric labels and are NOT required to be
/// unique. Two checks sharing a name but not a URL publish distinct
/// time series (the metric key is the (name, url) pair); two checks
/// sharing both name and URL race on the same entry, last writer wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckSpec {
    /// Metric label identifying the check.
    pub name: String,
    /// Target URL, probed with GET.
    pub url: String,
    /// Expected HTTP status code.
    #[serde(default = "default_status")]
    pub status: u16,
    /// Expected response body, compared against the trimmed body text.
    /// When absent the body is not checked.
    pub response: Option<String>,
    /// Seconds between probes; falls back to the global interval.
    pub interval: Option<u64>,
}

impl CheckSpec {
    /// Resolve the probe interval for this check.
    pub fn interval(&self, default_secs: u64) -> Duration {
        Duration::from_secs(self.interval.unwrap_or(default_secs))
    }
}

/// Top-level daemon configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VigilConfig {
    /// Default probe interval in seconds (per-check override allowed).
    #[serde(default = "default_interval")]
    pub interval: u64,
    /// Total request timeout in seconds, applied uniformly to every probe
    /// (connect + send + full body read).
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Port the HTTP front-end listens on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Log level directive, e.g. "info" or "debug".
    pub log_level: Option<String>,
    /// Optional log file; logs always go to stdout as well.
    pub log_file: Option<String>,
    /// The checks to probe.
    #[serde(default)]
    pub checks: Vec<CheckSpec>,
}

fn default_status() -> u16 {
    200
}

fn default_interval() -> u64 {
    30
}

fn default_timeout() -> u64 {
    10
}

fn default_port() -> u16 {
    8080
}

impl VigilConfig {
    /// Load the configuration from a TOML file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: VigilConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(config)
    }

    /// Request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

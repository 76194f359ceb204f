//! Client configuration.
//!
//! Settings are resolved from, in decreasing priority: explicit builder
//! arguments (CLI flags and the `AIRPORT_API_URL` environment variable), a
//! JSON configuration file, and built-in defaults. The configuration file is
//! looked up with the XDG Base Directory specification at
//! `$XDG_CONFIG_HOME/airport/config.json` unless a path is given explicitly.
//!
//! ```json
//! {
//!   "api_url": "http://localhost:8080/pa165/api",
//!   "timeout_secs": 30,
//!   "time_zone": "Europe/Prague"
//! }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use jiff::tz::TimeZone;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result, ResultExt};

/// API root used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/pa165/api";

/// Optional settings, each falling back to the next configuration source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// API root, e.g. `http://localhost:8080/pa165/api`
    pub api_url: Option<String>,
    /// Request timeout in seconds; no timeout when unset
    pub timeout_secs: Option<u64>,
    /// IANA time zone used to display flight times; UTC when unset
    pub time_zone: Option<String>,
}

impl ClientConfig {
    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Configuration` if the file cannot be read or is
    /// not a valid configuration document.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let text = fs::read_to_string(path)
            .config_context(format!("Cannot read config file '{}'", path.display()))?;
        serde_json::from_str(&text)
            .config_context(format!("Invalid config file '{}'", path.display()))
    }

    /// Reads the XDG configuration file if one exists; a missing file yields
    /// the empty configuration.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Location of an existing XDG configuration file.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("airport").find_config_file("config.json")
    }

    /// Overlays `other` on top of `self`: every setting present in `other`
    /// wins.
    pub fn merge(self, other: ClientConfig) -> Self {
        Self {
            api_url: other.api_url.or(self.api_url),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
            time_zone: other.time_zone.or(self.time_zone),
        }
    }

    /// Effective API root.
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Effective request timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Effective display time zone.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Configuration` for an unknown zone name.
    pub fn time_zone(&self) -> Result<TimeZone> {
        match &self.time_zone {
            Some(name) => TimeZone::get(name).map_err(|e| {
                ClientError::configuration(format!("Unknown time zone '{name}': {e}"))
            }),
            None => Ok(TimeZone::UTC),
        }
    }
}

//! Persisted user configuration
//!
//! Read with confy from `stopwatch/config.toml` in the platform config
//! directory. Only the default refresh interval lives here; `-d` overrides it.
//! A missing file means defaults and is never created on the user's behalf.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::interval::parse_interval;

pub const APP_NAME: &str = "stopwatch";
pub const CONFIG_NAME: &str = "config";

/// Refresh interval used when neither `-d` nor the config file set one
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopwatchConfig {
    /// Decimal seconds between display refreshes
    pub refresh_interval: String,
}

impl Default for StopwatchConfig {
    fn default() -> Self {
        Self {
            refresh_interval: "0.1".to_string(),
        }
    }
}

impl StopwatchConfig {
    /// Load from the platform config directory.
    pub fn load() -> Result<Self, ConfigError> {
        let path = confy::get_configuration_file_path(APP_NAME, CONFIG_NAME)?;
        Self::load_from(&path)
    }

    /// Load from `path`. A missing file yields the defaults without writing one.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = ?path, "no configuration file, using defaults");
            return Ok(Self::default());
        }
        Ok(confy::load_path(path)?)
    }

    /// Load the config file, falling back to defaults when it can't be read.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(Self::fallback)
    }

    /// Like [`Self::load_or_default`] for an explicit path.
    pub fn load_from_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(Self::fallback)
    }

    fn fallback(e: ConfigError) -> Self {
        tracing::warn!(error = %e, "failed to load configuration, using defaults");
        Self::default()
    }

    pub fn refresh_interval(&self) -> Result<Duration, ConfigError> {
        parse_interval(&self.refresh_interval).map_err(|source| ConfigError::InvalidInterval {
            value: self.refresh_interval.clone(),
            source,
        })
    }
}

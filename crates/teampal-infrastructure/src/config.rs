//! Application configuration.
//!
//! Loaded from `{config_dir}/config.toml`. Absent or malformed files fall
//! back silently to the defaults; configuration is never a startup blocker.

use crate::paths::TeamPalPaths;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Delay before a simulated reply arrives, in milliseconds.
    pub reply_delay_ms: u64,
    /// Optional override for the data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1500,
            data_dir: None,
        }
    }
}

impl AppConfig {
    /// Loads the configuration file, falling back to defaults.
    pub fn load(paths: &TeamPalPaths) -> Self {
        let Ok(path) = paths.config_file() else {
            return Self::default();
        };

        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default();
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("malformed config.toml, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Persists the configuration file (used by the settings screen).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be serialized or written.
    pub fn save(&self, paths: &TeamPalPaths) -> teampal_core::error::Result<()> {
        let path = paths.config_file()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// The simulated-reply delay as a [`Duration`].
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

//! Unified path management for TeamPal data files.
//!
//! All persisted snapshots live under the platform config and data
//! directories. A base-path override collapses both under one directory,
//! which is what the tests use.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/teampal/            # Config directory
//! ├── config.toml               # Application configuration
//! └── app_state.json            # Login flag, last active agent
//!
//! ~/.local/share/teampal/       # Data directory
//! ├── folders.json              # Workspace folder snapshot
//! └── chat_history/             # One file per agent conversation
//!     └── <agent_id>.json
//! ```

use std::path::{Path, PathBuf};

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for teampal_core::TeamPalError {
    fn from(err: PathError) -> Self {
        teampal_core::TeamPalError::config(err.to_string())
    }
}

/// Unified path management for TeamPal.
#[derive(Debug, Clone, Default)]
pub struct TeamPalPaths {
    /// When set, both config and data resolve under this directory.
    base: Option<PathBuf>,
    /// Configured data-directory override (`config.toml`).
    data_override: Option<PathBuf>,
}

impl TeamPalPaths {
    /// Creates a path resolver, optionally rooted at `base` (for tests).
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
            data_override: None,
        }
    }

    /// Applies the data-directory override from configuration.
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        self.data_override = data_dir;
        self
    }

    /// Returns the TeamPal configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join("teampal"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the TeamPal data directory (snapshots, conversation files).
    ///
    /// A configured override wins over both the base path and the platform
    /// default.
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(dir) = &self.data_override {
            return Ok(dir.clone());
        }
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join("teampal"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Returns the path to the application state file.
    pub fn app_state_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("app_state.json"))
    }

    /// Returns the path to the workspace folder snapshot.
    pub fn folders_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("folders.json"))
    }

    /// Returns the conversation history directory.
    pub fn chat_history_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("chat_history"))
    }

    /// Returns the conversation history file for one agent.
    ///
    /// The file is namespaced by agent id, so histories never leak across
    /// agents.
    pub fn chat_history_file(&self, agent_id: &str) -> Result<PathBuf, PathError> {
        Ok(self.chat_history_dir()?.join(format!("{agent_id}.json")))
    }
}

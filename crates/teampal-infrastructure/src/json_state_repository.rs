//! Application state repository implementation.
//!
//! Reads and writes the application state snapshot and caches it in memory
//! to avoid repeated file I/O. All methods are async to stay non-blocking
//! in async contexts.

use crate::atomic_json::AtomicJsonFile;
use crate::paths::TeamPalPaths;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use teampal_core::error::Result;
use teampal_core::state::{AppState, StateRepository};
use tokio::sync::Mutex;

/// File-backed application state repository with an in-memory cache.
#[derive(Clone)]
pub struct JsonStateRepository {
    /// Cached app state loaded from storage.
    state: Arc<Mutex<AppState>>,
    /// Snapshot file for persistence.
    file: Arc<AtomicJsonFile<AppState>>,
}

impl JsonStateRepository {
    /// Creates a repository at the default location and loads the initial
    /// state.
    ///
    /// An absent or malformed snapshot yields the default state.
    pub fn default_location() -> Result<Self> {
        Self::new(None)
    }

    /// Creates a repository with a custom base directory (for testing).
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let paths = TeamPalPaths::new(base_dir);
        let file = AtomicJsonFile::new(paths.app_state_file()?);

        let initial = match file.load() {
            Ok(Some(state)) => state,
            Ok(None) => AppState::default(),
            Err(err) => {
                tracing::warn!("malformed app state snapshot, using defaults: {err}");
                AppState::default()
            }
        };

        Ok(Self {
            state: Arc::new(Mutex::new(initial)),
            file: Arc::new(file),
        })
    }

    /// Applies a mutation to the cached state and persists the result.
    async fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut AppState),
    {
        let mut state = self.state.lock().await;
        f(&mut state);
        self.file.save(&state)
    }
}

#[async_trait]
impl StateRepository for JsonStateRepository {
    async fn get_state(&self) -> Result<AppState> {
        Ok(self.state.lock().await.clone())
    }

    async fn save_state(&self, state: AppState) -> Result<()> {
        let mut cached = self.state.lock().await;
        *cached = state;
        self.file.save(&cached)
    }

    async fn is_logged_in(&self) -> bool {
        self.state.lock().await.is_logged_in
    }

    async fn set_logged_in(&self, logged_in: bool) -> Result<()> {
        self.update(|state| state.is_logged_in = logged_in).await
    }

    async fn last_active_agent(&self) -> Option<String> {
        self.state.lock().await.last_active_agent_id.clone()
    }

    async fn set_last_active_agent(&self, agent_id: Option<String>) -> Result<()> {
        self.update(|state| state.last_active_agent_id = agent_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_defaults_when_no_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonStateRepository::new(Some(temp_dir.path())).unwrap();

        assert!(!repo.is_logged_in().await);
        assert!(repo.last_active_agent().await.is_none());
    }

    #[tokio::test]
    async fn test_login_flag_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();

        {
            let repo = JsonStateRepository::new(Some(temp_dir.path())).unwrap();
            repo.set_logged_in(true).await.unwrap();
            repo.set_last_active_agent(Some("101".to_string()))
                .await
                .unwrap();
        }

        let reopened = JsonStateRepository::new(Some(temp_dir.path())).unwrap();
        assert!(reopened.is_logged_in().await);
        assert_eq!(reopened.last_active_agent().await, Some("101".to_string()));
    }

    #[tokio::test]
    async fn test_malformed_snapshot_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("app_state.json"), "garbage").unwrap();

        let repo = JsonStateRepository::new(Some(temp_dir.path())).unwrap();
        assert_eq!(repo.get_state().await.unwrap(), AppState::default());
    }
}

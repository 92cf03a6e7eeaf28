//! Application state repository trait.

use super::model::AppState;
use crate::error::Result;
use async_trait::async_trait;

/// Repository for application-level state.
///
/// Implementations persist the whole [`AppState`] as a single snapshot and
/// may cache it in memory; the convenience accessors operate on that
/// snapshot.
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// Returns the current application state.
    async fn get_state(&self) -> Result<AppState>;

    /// Persists the application state, overwriting any prior snapshot.
    async fn save_state(&self, state: AppState) -> Result<()>;

    /// Whether the user is currently logged in.
    async fn is_logged_in(&self) -> bool;

    /// Sets the login flag.
    async fn set_logged_in(&self, logged_in: bool) -> Result<()>;

    /// Returns the last active agent id, if any.
    async fn last_active_agent(&self) -> Option<String>;

    /// Sets or clears the last active agent id.
    async fn set_last_active_agent(&self, agent_id: Option<String>) -> Result<()>;
}

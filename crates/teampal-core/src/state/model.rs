//! Application state domain models.
//!
//! Contains the application-level state that persists across restarts.

use serde::{Deserialize, Serialize};

/// Application state that persists across restarts.
///
/// # Fields
///
/// * `is_logged_in` - Whether the user has passed the login gate. Route
///   guarding is the presentation layer's job; this is only the persisted
///   flag it reads.
/// * `last_active_agent_id` - The agent whose chat was last open, used to
///   restore the view on startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Whether the user is currently logged in.
    #[serde(default)]
    pub is_logged_in: bool,

    /// ID of the agent whose chat was last open.
    pub last_active_agent_id: Option<String>,
}

impl AppState {
    /// Creates a new AppState with default values.
    pub fn new() -> Self {
        Self::default()
    }
}

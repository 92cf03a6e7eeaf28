//! Workspace folder and agent domain models.
//!
//! A workspace is organized as a flat, ordered list of folders, each owning
//! an ordered list of agents. The serialized form uses camelCase field names
//! to stay compatible with snapshots written by earlier builds.

use serde::{Deserialize, Serialize};

/// A chat persona a user can converse with.
///
/// Agents are owned exclusively by exactly one [`Folder`]; deleting the
/// folder removes its agents from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Unique agent identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description of what the agent does.
    pub description: String,
    /// Department label shown in chat headers and the welcome message.
    #[serde(default)]
    pub department: String,
    /// Avatar glyph (first letter of the name, uppercased).
    pub avatar: String,
    /// Avatar background color class, derived from the folder theme.
    pub avatar_color: String,
    /// Avatar text color class, derived from the folder theme.
    pub text_color: String,
}

/// A named grouping that owns a collection of agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique numeric identifier.
    pub id: i64,
    /// Folder name (mutable via rename).
    pub name: String,
    /// Theme tag driving agent color derivation.
    pub theme: String,
    /// Agents owned by this folder, in insertion order.
    #[serde(default)]
    pub agents: Vec<Agent>,
}

impl Folder {
    /// Looks up an owned agent by id.
    pub fn agent(&self, agent_id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == agent_id)
    }
}

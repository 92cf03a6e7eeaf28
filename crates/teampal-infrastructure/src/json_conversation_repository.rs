//! JSON file-based ConversationRepository implementation.
//!
//! Stores one JSON snapshot per agent conversation:
//!
//! ```text
//! {data_dir}/chat_history/
//! ├── 101.json
//! └── 102.json
//! ```
//!
//! Message timestamps are serialized as ISO 8601 strings and reconstituted
//! into timestamp values on load.

use crate::atomic_json::AtomicJsonFile;
use crate::paths::TeamPalPaths;
use async_trait::async_trait;
use std::path::Path;
use teampal_core::conversation::{ConversationRepository, Message};
use teampal_core::error::Result;

/// File-backed conversation repository, one snapshot file per agent.
pub struct JsonConversationRepository {
    paths: TeamPalPaths,
}

impl JsonConversationRepository {
    /// Creates a repository at the default location.
    pub fn default_location() -> Self {
        Self::new(None)
    }

    /// Creates a repository with a custom base directory (for testing).
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            paths: TeamPalPaths::new(base_dir),
        }
    }

    fn history_file(&self, agent_id: &str) -> Result<AtomicJsonFile<Vec<Message>>> {
        Ok(AtomicJsonFile::new(self.paths.chat_history_file(agent_id)?))
    }
}

#[async_trait]
impl ConversationRepository for JsonConversationRepository {
    async fn load_history(&self, agent_id: &str) -> Result<Vec<Message>> {
        match self.history_file(agent_id)?.load() {
            Ok(snapshot) => Ok(snapshot.unwrap_or_default()),
            Err(err) if err.is_serialization() => {
                tracing::warn!(%agent_id, "malformed conversation snapshot, starting empty: {err}");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    async fn save_history(&self, agent_id: &str, messages: &[Message]) -> Result<()> {
        self.history_file(agent_id)?.save(&messages.to_vec())
    }

    async fn delete_history(&self, agent_id: &str) -> Result<()> {
        self.history_file(agent_id)?.delete()
    }
}

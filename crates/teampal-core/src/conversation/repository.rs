//! Conversation repository trait.
//!
//! Defines the interface for per-agent conversation persistence.

use super::message::Message;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for per-agent conversation history.
///
/// Each agent id maps to its own persisted snapshot; implementations must
/// namespace storage per agent so histories never leak across agents.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Return an empty sequence for absent or malformed snapshots (a corrupt
///   history must never take the chat view down)
/// - Reconstitute ISO 8601 timestamp strings into timestamp values on load
/// - Treat `save_history` as a full-snapshot overwrite
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Loads the persisted message sequence for `agent_id`.
    ///
    /// # Returns
    ///
    /// - `Ok(messages)`: the stored sequence, empty if absent or malformed
    /// - `Err(_)`: storage could not be accessed
    async fn load_history(&self, agent_id: &str) -> Result<Vec<Message>>;

    /// Persists the full message sequence for `agent_id`, overwriting any
    /// prior snapshot.
    ///
    /// Called after every message-list mutation.
    async fn save_history(&self, agent_id: &str, messages: &[Message]) -> Result<()>;

    /// Deletes the persisted snapshot for `agent_id`.
    ///
    /// Deleting an absent snapshot is not an error.
    async fn delete_history(&self, agent_id: &str) -> Result<()>;

    /// Resets the conversation for `agent_id` to a single welcome message.
    ///
    /// The prior snapshot is deleted and the reseeded sequence is persisted,
    /// so a subsequent [`load_history`](Self::load_history) returns exactly
    /// the welcome message.
    async fn reset_history(&self, agent_id: &str, welcome: Message) -> Result<Vec<Message>> {
        self.delete_history(agent_id).await?;
        let messages = vec![welcome];
        self.save_history(agent_id, &messages).await?;
        Ok(messages)
    }
}

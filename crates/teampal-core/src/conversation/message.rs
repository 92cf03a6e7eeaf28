//! Conversation message types.
//!
//! This module contains types for representing messages in an agent
//! conversation, including sender roles and the message kind discriminator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents the role of a message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the agent.
    Agent,
}

/// Discriminates what a message is, independent of its text content.
///
/// Rendering and filtering decisions key off this tag so they never depend
/// on string equality with mutable prompt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKind {
    /// Synthesized greeting seeded into a fresh conversation.
    Welcome,
    /// A suggested prompt the user can pick up.
    Suggestion,
    /// Free-form user input.
    User,
    /// Simulated agent reply.
    Agent,
    /// Message composed from a submitted task form.
    TaskSubmission,
}

impl MessageKind {
    /// The sender role implied by this kind.
    pub fn role(&self) -> MessageRole {
        match self {
            MessageKind::Welcome | MessageKind::Suggestion | MessageKind::Agent => {
                MessageRole::Agent
            }
            MessageKind::User | MessageKind::TaskSubmission => MessageRole::User,
        }
    }
}

/// A single message in a conversation history.
///
/// Messages are immutable once created. The id is derived from the creation
/// time in epoch milliseconds; uniqueness within a conversation is
/// best-effort (two messages created within the same millisecond share an
/// id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Identifier derived from the creation timestamp.
    pub id: String,
    /// What this message is (welcome, suggestion, user input, ...).
    pub kind: MessageKind,
    /// The role of the message sender.
    pub sender: MessageRole,
    /// The text content of the message.
    pub content: String,
    /// Timestamp when the message was created (serialized as ISO 8601).
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Creates a message of the given kind, stamped with the current time.
    pub fn new(kind: MessageKind, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self::at(now.timestamp_millis().to_string(), kind, content, now)
    }

    /// Creates a message with an explicit id and timestamp.
    pub fn at(
        id: impl Into<String>,
        kind: MessageKind,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            sender: kind.role(),
            content: content.into(),
            timestamp,
        }
    }

    /// Creates a free-form user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageKind::User, content)
    }

    /// Creates a simulated agent reply.
    ///
    /// The id is offset by one millisecond so a reply never collides with
    /// the user message that triggered it.
    pub fn agent_reply(content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self::at(
            (now.timestamp_millis() + 1).to_string(),
            MessageKind::Agent,
            content,
            now,
        )
    }
}

//! Conversation domain module.
//!
//! # Module Structure
//!
//! - `message`: Message types (`Message`, `MessageRole`, `MessageKind`)
//! - `repository`: Repository trait for conversation persistence

mod message;
mod repository;

// Re-export public API
pub use message::{Message, MessageKind, MessageRole};
pub use repository::ConversationRepository;

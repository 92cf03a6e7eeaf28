//! Chat view domain module.
//!
//! # Module Structure
//!
//! - `state`: Controller state types (`ChatState`)
//! - `reply`: Synthesized agent content (welcome, suggestions, replies)
//! - `controller`: The chat view controller (`ChatController`)

mod controller;
pub mod reply;
mod state;

// Re-export public API
pub use controller::{ChatController, SendOutcome, TaskSubmitOutcome};
pub use state::ChatState;

//! Chat controller state types.

use serde::{Deserialize, Serialize};

/// The current state of a chat controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatState {
    /// Ready to accept input.
    Idle,
    /// A simulated reply is scheduled; the send control is disabled.
    AwaitingReply,
}

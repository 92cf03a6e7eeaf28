//! Synthesized agent content.
//!
//! All agent-authored text is generated locally: the welcome greeting, the
//! built-in suggested prompts and the simulated replies. None of this
//! involves a real model call; if a backend is ever wired in, this module
//! is the seam to replace.

use crate::conversation::{Message, MessageKind};
use crate::workspace::Agent;
use std::time::Duration;

/// Delay before a simulated reply arrives.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

/// Suggested prompts seeded into a fresh conversation.
pub const SUGGESTED_PROMPTS: [&str; 3] = [
    "How can I improve my sales skills and hit my revenue targets?",
    "Is there a way to build better relationships with customers?",
    "Which activities should I prioritize to grow the business?",
];

/// Composes the welcome greeting for an agent.
pub fn welcome_text(agent: &Agent) -> String {
    format!(
        "Hello! I'm {}, {} at TeamPal, ready to help with anything related to AI automation. \
         I can help you build strategy, optimize performance and answer your questions. \
         Let me know how I can support you today!",
        agent.name, agent.department
    )
}

/// Builds the welcome message for an agent.
pub fn welcome_message(agent: &Agent) -> Message {
    Message::new(MessageKind::Welcome, welcome_text(agent))
}

/// Builds the initial history for a first visit: the welcome greeting
/// followed by the suggested prompts.
pub fn seeded_history(agent: &Agent) -> Vec<Message> {
    let mut messages = vec![welcome_message(agent)];
    messages.extend(
        SUGGESTED_PROMPTS
            .iter()
            .enumerate()
            .map(|(i, prompt)| {
                // Offset ids so same-millisecond seeding stays unique
                let now = chrono::Utc::now();
                Message::at(
                    (now.timestamp_millis() + 1 + i as i64).to_string(),
                    MessageKind::Suggestion,
                    *prompt,
                    now,
                )
            }),
    );
    messages
}

/// Composes the simulated reply to a free-form user message.
pub fn compose_reply(agent: &Agent, input: &str) -> String {
    format!(
        "Thank you for your message. As {}, I'm here to help you with {} related questions. \
         Let me address your inquiry about \"{}\".",
        agent.name,
        agent.department.to_lowercase(),
        input
    )
}

/// Composes the simulated reply to a picked-up suggestion.
pub fn compose_suggestion_reply(agent: &Agent, suggestion: &str) -> String {
    let preview: String = suggestion.chars().take(50).collect();
    format!(
        "Great question about \"{}...\". Here's my response as {}...",
        preview, agent.name
    )
}

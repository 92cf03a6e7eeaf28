//! Chat view controller.
//!
//! Mediates message composition for a single agent conversation: sending
//! user input, picking up suggested prompts, submitting task forms and
//! scheduling the delayed simulated reply. The controller is driven from a
//! single UI thread; the only background work is the reply task, whose
//! handle is kept so it can be cancelled before it touches a conversation
//! that was reset or torn down.

use super::reply;
use super::state::ChatState;
use crate::conversation::{ConversationRepository, Message, MessageKind};
use crate::error::Result;
use crate::task_form::TaskFormState;
use crate::workspace::Agent;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Outcome of a send-type action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The message was appended and a reply was scheduled.
    Sent,
    /// The input was empty/whitespace-only or referenced nothing; no state
    /// changed and nothing was persisted.
    Ignored,
    /// A simulated reply is still pending; the action was suppressed.
    Busy,
}

/// Outcome of a task form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSubmitOutcome {
    /// The composed message was appended and a reply was scheduled.
    Submitted,
    /// No task is currently active.
    NoActiveTask,
    /// Required fields are still empty; nothing was mutated.
    MissingRequired(Vec<&'static str>),
}

/// Controls one open chat with an agent.
pub struct ChatController {
    agent: Agent,
    conversations: Arc<dyn ConversationRepository>,
    /// Shared with the scheduled reply task.
    messages: Arc<Mutex<Vec<Message>>>,
    reply_delay: Duration,
    /// Handle of the scheduled reply task, if one is in flight.
    pending_reply: Option<JoinHandle<()>>,
}

impl ChatController {
    /// Opens the chat for an agent with the default reply delay.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversation cannot be loaded or seeded.
    pub async fn open(agent: Agent, conversations: Arc<dyn ConversationRepository>) -> Result<Self> {
        Self::open_with_delay(agent, conversations, reply::DEFAULT_REPLY_DELAY).await
    }

    /// Opens the chat with a custom simulated-reply delay.
    ///
    /// Loads the persisted history; an empty or absent history is lazily
    /// seeded with the welcome greeting and the suggested prompts, and the
    /// seeded sequence is persisted immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversation cannot be loaded or seeded.
    pub async fn open_with_delay(
        agent: Agent,
        conversations: Arc<dyn ConversationRepository>,
        reply_delay: Duration,
    ) -> Result<Self> {
        let mut history = conversations.load_history(&agent.id).await?;
        if history.is_empty() {
            tracing::debug!(agent_id = %agent.id, "seeding fresh conversation");
            history = reply::seeded_history(&agent);
            conversations.save_history(&agent.id, &history).await?;
        }

        Ok(Self {
            agent,
            conversations,
            messages: Arc::new(Mutex::new(history)),
            reply_delay,
            pending_reply: None,
        })
    }

    /// The agent this controller converses with.
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// The current controller state.
    pub fn state(&self) -> ChatState {
        match &self.pending_reply {
            Some(handle) if !handle.is_finished() => ChatState::AwaitingReply,
            _ => ChatState::Idle,
        }
    }

    /// A snapshot of the current message sequence.
    pub async fn messages(&self) -> Vec<Message> {
        self.messages.lock().await.clone()
    }

    /// Sends a user message and schedules the simulated reply.
    ///
    /// Whitespace-only input and sends while a reply is pending are guarded
    /// no-ops: no state change, no persistence write. The user message is
    /// appended and persisted synchronously, so it is always ordered before
    /// its reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the mutated history cannot be persisted.
    pub async fn send_message(&mut self, text: &str) -> Result<SendOutcome> {
        if text.trim().is_empty() {
            return Ok(SendOutcome::Ignored);
        }
        if self.state() == ChatState::AwaitingReply {
            return Ok(SendOutcome::Busy);
        }

        self.append_and_persist(Message::user(text)).await?;
        self.schedule_reply(reply::compose_reply(&self.agent, text));
        Ok(SendOutcome::Sent)
    }

    /// Picks up a seeded suggestion by message id.
    ///
    /// The suggestion message is removed from the sequence (matched by id
    /// and kind, never by content) and its text is re-sent as a user
    /// message with a suggestion-flavored reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the mutated history cannot be persisted.
    pub async fn select_suggestion(&mut self, message_id: &str) -> Result<SendOutcome> {
        if self.state() == ChatState::AwaitingReply {
            return Ok(SendOutcome::Busy);
        }

        let suggestion = {
            let mut messages = self.messages.lock().await;
            let Some(position) = messages
                .iter()
                .position(|m| m.id == message_id && m.kind == MessageKind::Suggestion)
            else {
                return Ok(SendOutcome::Ignored);
            };

            let suggestion = messages.remove(position);
            messages.push(Message::user(suggestion.content.clone()));
            self.conversations
                .save_history(&self.agent.id, &messages)
                .await?;
            suggestion
        };

        self.schedule_reply(reply::compose_suggestion_reply(
            &self.agent,
            &suggestion.content,
        ));
        Ok(SendOutcome::Sent)
    }

    /// Submits the active task form as a single structured message.
    ///
    /// Validation failures leave the conversation and the form untouched.
    /// On success the composed message is appended and persisted, a reply
    /// is scheduled, and the form selection and values are cleared.
    ///
    /// Note: unlike [`send_message`](Self::send_message), submission is not
    /// suppressed while a reply is pending, so a task submission can overlap
    /// an in-flight reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the mutated history cannot be persisted.
    pub async fn submit_task_form(&mut self, form: &mut TaskFormState) -> Result<TaskSubmitOutcome> {
        if form.active_task().is_none() {
            return Ok(TaskSubmitOutcome::NoActiveTask);
        }

        let missing = form.missing_required();
        if !missing.is_empty() {
            return Ok(TaskSubmitOutcome::MissingRequired(missing));
        }

        let content = form.compose_message();
        self.append_and_persist(Message::new(MessageKind::TaskSubmission, &content))
            .await?;
        self.schedule_reply(reply::compose_reply(&self.agent, &content));
        form.clear();

        Ok(TaskSubmitOutcome::Submitted)
    }

    /// Discards the conversation and reseeds it with a fresh welcome
    /// message.
    ///
    /// Any scheduled reply is cancelled first so it can never append to the
    /// reset sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the reset cannot be persisted.
    pub async fn new_chat(&mut self) -> Result<()> {
        if let Some(handle) = self.pending_reply.take() {
            handle.abort();
        }

        let welcome = reply::welcome_message(&self.agent);
        let history = self
            .conversations
            .reset_history(&self.agent.id, welcome)
            .await?;
        *self.messages.lock().await = history;

        Ok(())
    }

    /// Waits for the scheduled reply to arrive, if one is pending.
    pub async fn wait_for_reply(&mut self) {
        if let Some(handle) = self.pending_reply.take() {
            // A JoinError here means the task was aborted; either way there
            // is nothing pending anymore.
            let _ = handle.await;
        }
    }

    /// Appends a message and persists the full sequence.
    async fn append_and_persist(&self, message: Message) -> Result<()> {
        let mut messages = self.messages.lock().await;
        messages.push(message);
        self.conversations
            .save_history(&self.agent.id, &messages)
            .await
    }

    /// Spawns the delayed reply task and keeps its handle.
    fn schedule_reply(&mut self, content: String) {
        let messages = Arc::clone(&self.messages);
        let conversations = Arc::clone(&self.conversations);
        let agent_id = self.agent.id.clone();
        let delay = self.reply_delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut messages = messages.lock().await;
            messages.push(Message::agent_reply(content));
            if let Err(err) = conversations.save_history(&agent_id, &messages).await {
                tracing::warn!(%agent_id, "failed to persist simulated reply: {err}");
            }
        });

        self.pending_reply = Some(handle);
    }
}

impl Drop for ChatController {
    fn drop(&mut self) {
        // Never let a scheduled reply outlive its controller
        if let Some(handle) = self.pending_reply.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::MessageRole;
    use crate::task_form::FieldValue;
    use std::collections::HashMap;
    use std::sync::Mutex as StdMutex;

    // Mock ConversationRepository for testing
    struct MockConversationRepository {
        histories: StdMutex<HashMap<String, Vec<Message>>>,
        save_count: StdMutex<usize>,
    }

    impl MockConversationRepository {
        fn new() -> Self {
            Self {
                histories: StdMutex::new(HashMap::new()),
                save_count: StdMutex::new(0),
            }
        }

        fn save_count(&self) -> usize {
            *self.save_count.lock().unwrap()
        }

        fn stored(&self, agent_id: &str) -> Vec<Message> {
            self.histories
                .lock()
                .unwrap()
                .get(agent_id)
                .cloned()
                .unwrap_or_default()
        }
    }

    #[async_trait::async_trait]
    impl ConversationRepository for MockConversationRepository {
        async fn load_history(&self, agent_id: &str) -> Result<Vec<Message>> {
            Ok(self.stored(agent_id))
        }

        async fn save_history(&self, agent_id: &str, messages: &[Message]) -> Result<()> {
            self.histories
                .lock()
                .unwrap()
                .insert(agent_id.to_string(), messages.to_vec());
            *self.save_count.lock().unwrap() += 1;
            Ok(())
        }

        async fn delete_history(&self, agent_id: &str) -> Result<()> {
            self.histories.lock().unwrap().remove(agent_id);
            Ok(())
        }
    }

    fn test_agent() -> Agent {
        Agent {
            id: "101".to_string(),
            name: "Sales Representative".to_string(),
            description: "desc".to_string(),
            department: "Sales".to_string(),
            avatar: "S".to_string(),
            avatar_color: "bg-blue-100".to_string(),
            text_color: "text-blue-700".to_string(),
        }
    }

    async fn open_controller(
        repository: Arc<MockConversationRepository>,
    ) -> ChatController {
        ChatController::open_with_delay(test_agent(), repository, Duration::from_millis(1500))
            .await
            .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_seeds_and_persists_fresh_conversation() {
        let repository = Arc::new(MockConversationRepository::new());
        let controller = open_controller(repository.clone()).await;

        let messages = controller.messages().await;
        assert_eq!(messages.len(), 1 + reply::SUGGESTED_PROMPTS.len());
        assert_eq!(messages[0].kind, MessageKind::Welcome);
        assert_eq!(repository.stored("101").len(), messages.len());
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_keeps_existing_history() {
        let repository = Arc::new(MockConversationRepository::new());
        let existing = vec![Message::user("already here")];
        repository.save_history("101", &existing).await.unwrap();

        let controller = open_controller(repository).await;
        assert_eq!(controller.messages().await, existing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_appends_user_then_agent_reply() {
        let repository = Arc::new(MockConversationRepository::new());
        let mut controller = open_controller(repository.clone()).await;
        let before = controller.messages().await.len();

        let outcome = controller.send_message("How do I close a deal?").await.unwrap();
        assert_eq!(outcome, SendOutcome::Sent);
        assert_eq!(controller.state(), ChatState::AwaitingReply);

        // The user message is visible (and persisted) before the reply
        let messages = controller.messages().await;
        assert_eq!(messages.len(), before + 1);
        assert_eq!(messages.last().unwrap().sender, MessageRole::User);

        controller.wait_for_reply().await;
        assert_eq!(controller.state(), ChatState::Idle);

        let messages = controller.messages().await;
        assert_eq!(messages.len(), before + 2);
        let reply = messages.last().unwrap();
        assert_eq!(reply.kind, MessageKind::Agent);
        assert!(reply.content.contains("\"How do I close a deal?\""));
        assert_eq!(repository.stored("101").len(), messages.len());
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_cycles_grow_by_two_in_order() {
        let repository = Arc::new(MockConversationRepository::new());
        let mut controller = open_controller(repository).await;
        let seeded = controller.messages().await.len();

        for i in 0..3 {
            controller.send_message(&format!("message {i}")).await.unwrap();
            controller.wait_for_reply().await;

            let messages = controller.messages().await;
            assert_eq!(messages.len(), seeded + (i + 1) * 2);
            let pair = &messages[messages.len() - 2..];
            assert_eq!(pair[0].sender, MessageRole::User);
            assert_eq!(pair[1].sender, MessageRole::Agent);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_input_is_ignored_without_persistence() {
        let repository = Arc::new(MockConversationRepository::new());
        let mut controller = open_controller(repository.clone()).await;
        let saves = repository.save_count();
        let before = controller.messages().await;

        assert_eq!(controller.send_message("").await.unwrap(), SendOutcome::Ignored);
        assert_eq!(
            controller.send_message("   \n\t").await.unwrap(),
            SendOutcome::Ignored
        );

        assert_eq!(controller.state(), ChatState::Idle);
        assert_eq!(controller.messages().await, before);
        assert_eq!(repository.save_count(), saves);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_is_suppressed_while_awaiting_reply() {
        let repository = Arc::new(MockConversationRepository::new());
        let mut controller = open_controller(repository).await;

        controller.send_message("first").await.unwrap();
        let during = controller.messages().await.len();

        assert_eq!(
            controller.send_message("second").await.unwrap(),
            SendOutcome::Busy
        );
        assert_eq!(controller.messages().await.len(), during);

        controller.wait_for_reply().await;
        assert_eq!(
            controller.send_message("second").await.unwrap(),
            SendOutcome::Sent
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_suggestion_replaces_it_with_user_message() {
        let repository = Arc::new(MockConversationRepository::new());
        let mut controller = open_controller(repository).await;

        let messages = controller.messages().await;
        let suggestion = messages
            .iter()
            .find(|m| m.kind == MessageKind::Suggestion)
            .cloned()
            .unwrap();

        let outcome = controller.select_suggestion(&suggestion.id).await.unwrap();
        assert_eq!(outcome, SendOutcome::Sent);

        let messages = controller.messages().await;
        assert!(messages.iter().all(|m| m.id != suggestion.id));
        let sent = messages.last().unwrap();
        assert_eq!(sent.kind, MessageKind::User);
        assert_eq!(sent.content, suggestion.content);

        controller.wait_for_reply().await;
        let messages = controller.messages().await;
        assert!(messages.last().unwrap().content.starts_with("Great question"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_unknown_suggestion_is_ignored() {
        let repository = Arc::new(MockConversationRepository::new());
        let mut controller = open_controller(repository).await;
        let before = controller.messages().await;

        // A user message id never matches the suggestion kind
        let outcome = controller.select_suggestion("does-not-exist").await.unwrap();
        assert_eq!(outcome, SendOutcome::Ignored);
        assert_eq!(controller.messages().await, before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_chat_resets_to_single_welcome() {
        let repository = Arc::new(MockConversationRepository::new());
        let mut controller = open_controller(repository.clone()).await;

        controller.send_message("hello").await.unwrap();
        controller.wait_for_reply().await;

        controller.new_chat().await.unwrap();

        let messages = controller.messages().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].kind, MessageKind::Welcome);
        assert!(messages[0].content.contains("Sales Representative"));

        // The reseeded sequence is what a reload sees
        assert_eq!(repository.stored("101").len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_chat_cancels_pending_reply() {
        let repository = Arc::new(MockConversationRepository::new());
        let mut controller = open_controller(repository.clone()).await;

        controller.send_message("hello").await.unwrap();
        assert_eq!(controller.state(), ChatState::AwaitingReply);

        controller.new_chat().await.unwrap();
        assert_eq!(controller.state(), ChatState::Idle);

        // Even well past the reply delay, the cancelled reply never lands
        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(controller.messages().await.len(), 1);
        assert_eq!(repository.stored("101").len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_submission_composes_single_message() {
        let repository = Arc::new(MockConversationRepository::new());
        let mut controller = open_controller(repository).await;
        let before = controller.messages().await.len();

        let mut form = TaskFormState::new();
        form.toggle_task("Draft an email");
        form.set_value("to", FieldValue::Text("sales@example.com".to_string()));
        form.set_value("subject", FieldValue::Text("Q3 kickoff".to_string()));
        form.set_value("points", FieldValue::Text("agenda, goals".to_string()));

        let outcome = controller.submit_task_form(&mut form).await.unwrap();
        assert_eq!(outcome, TaskSubmitOutcome::Submitted);

        let messages = controller.messages().await;
        assert_eq!(messages.len(), before + 1);
        let submission = messages.last().unwrap();
        assert_eq!(submission.kind, MessageKind::TaskSubmission);
        assert_eq!(submission.sender, MessageRole::User);
        assert!(submission.content.contains("To:"));
        assert!(submission.content.contains("Subject:"));
        assert!(submission.content.contains("Key points:"));

        // Submission clears the form
        assert!(form.active_task().is_none());

        controller.wait_for_reply().await;
        assert_eq!(controller.messages().await.len(), before + 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_submission_with_missing_required_does_not_mutate() {
        let repository = Arc::new(MockConversationRepository::new());
        let mut controller = open_controller(repository.clone()).await;
        let before = controller.messages().await;
        let saves = repository.save_count();

        let mut form = TaskFormState::new();
        form.toggle_task("Draft an email");
        form.set_value("to", FieldValue::Text("sales@example.com".to_string()));

        let outcome = controller.submit_task_form(&mut form).await.unwrap();
        assert!(matches!(outcome, TaskSubmitOutcome::MissingRequired(_)));
        assert_eq!(controller.messages().await, before);
        assert_eq!(repository.save_count(), saves);

        // The form keeps its state for the user to finish
        assert!(form.active_task().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_submission_can_overlap_pending_reply() {
        let repository = Arc::new(MockConversationRepository::new());
        let mut controller = open_controller(repository).await;

        controller.send_message("first").await.unwrap();
        assert_eq!(controller.state(), ChatState::AwaitingReply);

        let mut form = TaskFormState::new();
        form.toggle_task("Summarize a document");
        form.set_value(
            "document",
            FieldValue::File {
                file_name: "q3-report.pdf".to_string(),
            },
        );

        // Task submission is not gated on the pending reply
        let outcome = controller.submit_task_form(&mut form).await.unwrap();
        assert_eq!(outcome, TaskSubmitOutcome::Submitted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending_reply() {
        let repository = Arc::new(MockConversationRepository::new());
        let mut controller = open_controller(repository.clone()).await;

        controller.send_message("hello").await.unwrap();
        let during = repository.stored("101").len();
        drop(controller);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(repository.stored("101").len(), during);
    }
}

//! Task form domain models.
//!
//! A task form is a static field layout bound to a named suggested task.
//! Submitting one composes a single structured message for the chat view.

use serde::Serialize;
use std::collections::HashMap;

/// The input kind of a task form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    Textarea,
    /// File attachment; only the file name travels into the message.
    File,
}

/// A single field descriptor within a task form.
#[derive(Debug, Clone, Serialize)]
pub struct TaskField {
    /// Human-readable label shown next to the input.
    pub label: &'static str,
    /// Stable field name used to key submitted values.
    pub name: &'static str,
    /// Input kind.
    pub kind: FieldKind,
    /// Whether the field must be populated before submission.
    pub required: bool,
}

impl TaskField {
    /// Creates a new field descriptor.
    pub const fn new(
        label: &'static str,
        name: &'static str,
        kind: FieldKind,
        required: bool,
    ) -> Self {
        Self {
            label,
            name,
            kind,
            required,
        }
    }
}

/// A named task with its ordered field layout.
#[derive(Debug, Clone, Serialize)]
pub struct TaskForm {
    /// Task name shown as the suggested-task label.
    pub name: &'static str,
    /// Short description of what the task produces.
    pub description: &'static str,
    /// Ordered field descriptors.
    pub fields: Vec<TaskField>,
}

/// A value submitted for a task form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Text entered into a text or textarea field.
    Text(String),
    /// A file attachment; only the name is carried.
    File { file_name: String },
}

impl FieldValue {
    /// Whether this value counts as empty for required-field validation.
    ///
    /// File fields are satisfied by file presence, not text content.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::File { file_name } => file_name.is_empty(),
        }
    }

    /// The text this value contributes to the composed message.
    pub fn display(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::File { file_name } => file_name,
        }
    }
}

/// Mutable selection and input state for the task form panel.
///
/// At most one task is active at a time; selecting the already-active task
/// deselects it (toggle semantics). Field values are keyed by field name and
/// cleared whenever the selection changes.
#[derive(Debug, Default)]
pub struct TaskFormState {
    active_task: Option<&'static TaskForm>,
    values: HashMap<&'static str, FieldValue>,
}

impl TaskFormState {
    /// Creates an empty state with no active task.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently active task, if any.
    pub fn active_task(&self) -> Option<&'static TaskForm> {
        self.active_task
    }

    /// Toggles the task selection.
    ///
    /// Selecting the active task deselects it; selecting another task
    /// replaces the selection. Either way the form values are cleared.
    /// Unknown task names are a no-op.
    pub fn toggle_task(&mut self, name: &str) {
        match self.active_task {
            Some(active) if active.name == name => {
                self.active_task = None;
            }
            _ => {
                let Some(task) = super::builtin::find_task_form(name) else {
                    return;
                };
                self.active_task = Some(task);
            }
        }
        self.values.clear();
    }

    /// Records a value for a field of the active task.
    ///
    /// Ignored when no task is active or the field name does not belong to
    /// the active task's layout.
    pub fn set_value(&mut self, field_name: &str, value: FieldValue) {
        let Some(task) = self.active_task else {
            return;
        };
        let Some(field) = task.fields.iter().find(|f| f.name == field_name) else {
            return;
        };
        self.values.insert(field.name, value);
    }

    /// Returns the labels of required fields that are still empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let Some(task) = self.active_task else {
            return Vec::new();
        };

        task.fields
            .iter()
            .filter(|field| field.required)
            .filter(|field| {
                self.values
                    .get(field.name)
                    .is_none_or(|value| value.is_empty())
            })
            .map(|field| field.label)
            .collect()
    }

    /// Composes the structured message for the active task.
    ///
    /// The first line is the task name; each populated field follows as a
    /// `label: value` line in field order. File fields contribute the file
    /// name only.
    pub fn compose_message(&self) -> String {
        let Some(task) = self.active_task else {
            return String::new();
        };

        let mut lines = vec![task.name.to_string()];
        for field in &task.fields {
            if let Some(value) = self.values.get(field.name) {
                if !value.is_empty() {
                    lines.push(format!("{}: {}", field.label, value.display()));
                }
            }
        }
        lines.join("\n")
    }

    /// Clears the active task and all form values.
    pub fn clear(&mut self) {
        self.active_task = None;
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_selects_and_deselects() {
        let mut state = TaskFormState::new();

        state.toggle_task("Draft an email");
        assert!(state.active_task().is_some());

        // Selecting the active task again deselects it
        state.toggle_task("Draft an email");
        assert!(state.active_task().is_none());
    }

    #[test]
    fn test_toggle_unknown_task_is_noop() {
        let mut state = TaskFormState::new();
        state.toggle_task("No such task");
        assert!(state.active_task().is_none());
    }

    #[test]
    fn test_switching_tasks_clears_values() {
        let mut state = TaskFormState::new();
        state.toggle_task("Draft an email");
        state.set_value("to", FieldValue::Text("sales@example.com".to_string()));

        state.toggle_task("Summarize a document");
        assert!(!state.missing_required().is_empty());
        assert_eq!(state.compose_message(), "Summarize a document");
    }

    #[test]
    fn test_missing_required_reports_labels() {
        let mut state = TaskFormState::new();
        state.toggle_task("Draft an email");
        state.set_value("to", FieldValue::Text("sales@example.com".to_string()));

        let missing = state.missing_required();
        assert!(missing.contains(&"Subject"));
        assert!(missing.contains(&"Key points"));
        assert!(!missing.contains(&"To"));
    }

    #[test]
    fn test_whitespace_text_counts_as_empty() {
        let mut state = TaskFormState::new();
        state.toggle_task("Draft an email");
        state.set_value("subject", FieldValue::Text("   ".to_string()));

        assert!(state.missing_required().contains(&"Subject"));
    }

    #[test]
    fn test_file_field_satisfied_by_presence() {
        let mut state = TaskFormState::new();
        state.toggle_task("Summarize a document");
        state.set_value(
            "document",
            FieldValue::File {
                file_name: "q3-report.pdf".to_string(),
            },
        );

        assert!(state.missing_required().is_empty());
        let message = state.compose_message();
        assert!(message.contains("Document: q3-report.pdf"));
    }

    #[test]
    fn test_compose_message_contains_populated_labels() {
        let mut state = TaskFormState::new();
        state.toggle_task("Draft an email");
        state.set_value("to", FieldValue::Text("sales@example.com".to_string()));
        state.set_value("subject", FieldValue::Text("Q3 kickoff".to_string()));
        state.set_value("points", FieldValue::Text("agenda, goals".to_string()));

        let message = state.compose_message();
        assert!(message.starts_with("Draft an email"));
        assert!(message.contains("To: sales@example.com"));
        assert!(message.contains("Subject: Q3 kickoff"));
        assert!(message.contains("Key points: agenda, goals"));
    }

    #[test]
    fn test_set_value_ignores_foreign_fields() {
        let mut state = TaskFormState::new();
        state.toggle_task("Draft an email");
        state.set_value("document", FieldValue::Text("nope".to_string()));

        assert!(!state.compose_message().contains("nope"));
    }
}

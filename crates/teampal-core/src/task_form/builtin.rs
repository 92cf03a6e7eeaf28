//! Builtin task forms provided by the system.
//!
//! These forms are always available and cannot be modified by users. They
//! are loaded once at startup and cached for the lifetime of the
//! application.

use super::model::{FieldKind, TaskField, TaskForm};
use std::sync::OnceLock;

/// Static storage for builtin task forms (initialized once).
static BUILTIN_TASK_FORMS: OnceLock<Vec<TaskForm>> = OnceLock::new();

/// Returns a reference to all builtin task forms.
///
/// The forms are initialized on first access and cached for subsequent
/// calls.
pub fn builtin_task_forms() -> &'static [TaskForm] {
    BUILTIN_TASK_FORMS.get_or_init(|| {
        vec![
            TaskForm {
                name: "Draft an email",
                description: "Compose an email from recipients, subject and key points",
                fields: vec![
                    TaskField::new("To", "to", FieldKind::Text, true),
                    TaskField::new("Subject", "subject", FieldKind::Text, true),
                    TaskField::new("Key points", "points", FieldKind::Textarea, true),
                ],
            },
            TaskForm {
                name: "Summarize a document",
                description: "Summarize an attached document, optionally with a focus",
                fields: vec![
                    TaskField::new("Document", "document", FieldKind::File, true),
                    TaskField::new("Focus", "focus", FieldKind::Text, false),
                ],
            },
            TaskForm {
                name: "Plan a campaign",
                description: "Outline a campaign plan from goals and audience",
                fields: vec![
                    TaskField::new("Campaign name", "name", FieldKind::Text, true),
                    TaskField::new("Target audience", "audience", FieldKind::Text, true),
                    TaskField::new("Budget", "budget", FieldKind::Text, false),
                    TaskField::new("Brief", "brief", FieldKind::File, false),
                ],
            },
        ]
    })
}

/// Find a builtin task form by name.
pub fn find_task_form(name: &str) -> Option<&'static TaskForm> {
    builtin_task_forms().iter().find(|form| form.name == name)
}

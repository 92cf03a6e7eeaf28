//! Task form domain module.
//!
//! # Module Structure
//!
//! - `model`: Field descriptors, submitted values and panel state
//! - `builtin`: Builtin task forms

mod builtin;
mod model;

// Re-export public API
pub use builtin::{builtin_task_forms, find_task_form};
pub use model::{FieldKind, FieldValue, TaskField, TaskForm, TaskFormState};

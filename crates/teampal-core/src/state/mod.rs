//! Application state module.

mod model;
mod repository;

// Re-export public API
pub use model::AppState;
pub use repository::StateRepository;

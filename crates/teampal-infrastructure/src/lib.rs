//! TeamPal infrastructure.
//!
//! File-backed implementations of the `teampal-core` repository traits,
//! path management and the application configuration loader.

pub mod atomic_json;
pub mod config;
pub mod json_conversation_repository;
pub mod json_folder_repository;
pub mod json_state_repository;
pub mod paths;

pub use crate::atomic_json::AtomicJsonFile;
pub use crate::config::AppConfig;
pub use crate::json_conversation_repository::JsonConversationRepository;
pub use crate::json_folder_repository::JsonFolderRepository;
pub use crate::json_state_repository::JsonStateRepository;
pub use crate::paths::TeamPalPaths;

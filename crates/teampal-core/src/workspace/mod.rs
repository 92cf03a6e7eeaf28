//! Workspace domain module.
//!
//! This module contains the folder/agent domain models, the repository
//! interface and the workspace manager.
//!
//! # Module Structure
//!
//! - `model`: Core domain models (`Folder`, `Agent`)
//! - `preset`: Built-in default workspace contents
//! - `repository`: Repository trait for folder persistence
//! - `manager`: Workspace lifecycle management (`WorkspaceManager`)

mod manager;
mod model;
mod preset;
mod repository;

// Re-export public API
pub use manager::WorkspaceManager;
pub use model::{Agent, Folder};
pub use preset::default_folders;
pub use repository::FolderRepository;

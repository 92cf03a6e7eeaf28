//! Workspace lifecycle management.
//!
//! `WorkspaceManager` owns the in-memory folder collection and persists the
//! full snapshot through an injected [`FolderRepository`] after every
//! mutation. All mutation happens on the caller's single UI thread, so the
//! manager itself carries no locking.

use super::model::{Agent, Folder};
use super::preset;
use super::repository::FolderRepository;
use crate::error::Result;
use crate::theme::theme_to_palette;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Manages the workspace folder collection and its lifecycle.
///
/// `WorkspaceManager` is responsible for:
/// - Loading the persisted snapshot (or the built-in defaults)
/// - Creating, renaming and deleting folders
/// - Adding and removing agents within folders
/// - Persisting the full snapshot after every mutation
pub struct WorkspaceManager {
    /// In-memory folder collection, in insertion order.
    folders: Vec<Folder>,
    /// Persistent storage backend for the folder snapshot.
    repository: Arc<dyn FolderRepository>,
}

impl WorkspaceManager {
    /// Loads the workspace from the repository.
    ///
    /// If no snapshot has been persisted yet, the built-in default folder
    /// set is used instead.
    ///
    /// # Errors
    ///
    /// Returns an error if storage access fails.
    pub async fn load(repository: Arc<dyn FolderRepository>) -> Result<Self> {
        let folders = match repository.load().await? {
            Some(folders) => folders,
            None => {
                tracing::debug!("no folder snapshot found, using default workspace");
                preset::default_folders()
            }
        };

        Ok(Self {
            folders,
            repository,
        })
    }

    /// Returns the current folder collection.
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// Creates a new folder and appends it to the workspace.
    ///
    /// An empty theme falls back to `"general"`. The generated identifier is
    /// guaranteed unique within the current collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be persisted.
    pub async fn create_folder(&mut self, name: &str, theme: &str) -> Result<&Folder> {
        let theme = if theme.trim().is_empty() {
            "general"
        } else {
            theme
        };

        let folder = Folder {
            id: self.next_folder_id(),
            name: name.to_string(),
            theme: theme.to_string(),
            agents: Vec::new(),
        };

        tracing::info!(folder = %folder.name, theme = %folder.theme, "creating folder");
        self.folders.push(folder);
        self.persist().await?;

        // Safe to unwrap because we just pushed an element
        Ok(self.folders.last().unwrap())
    }

    /// Renames the folder matching `folder_id`.
    ///
    /// This is a no-op if no folder matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be persisted.
    pub async fn rename_folder(&mut self, folder_id: i64, new_name: &str) -> Result<()> {
        let Some(folder) = self.folders.iter_mut().find(|f| f.id == folder_id) else {
            return Ok(());
        };

        folder.name = new_name.to_string();
        self.persist().await
    }

    /// Deletes the folder matching `folder_id` and all its owned agents.
    ///
    /// Persisted conversation history for the removed agents is left in
    /// place; the snapshots remain loadable if an agent id is ever reused.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be persisted.
    pub async fn delete_folder(&mut self, folder_id: i64) -> Result<()> {
        let before = self.folders.len();
        self.folders.retain(|f| f.id != folder_id);

        if self.folders.len() == before {
            return Ok(());
        }

        tracing::info!(folder_id, "deleted folder");
        self.persist().await
    }

    /// Adds a new agent to the folder matching `folder_id`.
    ///
    /// The avatar glyph is the first letter of the name, uppercased; colors
    /// and department derive from the folder's theme. An empty description
    /// falls back to `"A {theme} agent"`.
    ///
    /// # Returns
    ///
    /// The created agent, or `None` if no folder matches `folder_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be persisted.
    pub async fn add_agent(
        &mut self,
        folder_id: i64,
        name: &str,
        description: &str,
    ) -> Result<Option<Agent>> {
        let Some(folder) = self.folders.iter_mut().find(|f| f.id == folder_id) else {
            return Ok(None);
        };

        let palette = theme_to_palette(&folder.theme);
        let description = if description.trim().is_empty() {
            format!("A {} agent", folder.theme)
        } else {
            description.to_string()
        };

        let agent = Agent {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description,
            department: capitalize(&folder.theme),
            avatar: name
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default(),
            avatar_color: palette.bg.to_string(),
            text_color: palette.text.to_string(),
        };

        tracing::info!(agent = %agent.name, folder = %folder.name, "adding agent");
        folder.agents.push(agent.clone());
        self.persist().await?;

        Ok(Some(agent))
    }

    /// Removes an agent from its folder's collection.
    ///
    /// This is a no-op if the folder or agent does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be persisted.
    pub async fn delete_agent(&mut self, folder_id: i64, agent_id: &str) -> Result<()> {
        let Some(folder) = self.folders.iter_mut().find(|f| f.id == folder_id) else {
            return Ok(());
        };

        let before = folder.agents.len();
        folder.agents.retain(|a| a.id != agent_id);

        if folder.agents.len() == before {
            return Ok(());
        }

        self.persist().await
    }

    /// Looks up an agent by id across all folders.
    ///
    /// Returns `None` for unknown ids; callers are expected to fall back to
    /// the agent listing view rather than treat this as fatal.
    pub fn find_agent(&self, agent_id: &str) -> Option<&Agent> {
        self.folders.iter().find_map(|f| f.agent(agent_id))
    }

    /// Generates a folder id unique within the current collection.
    ///
    /// The id is based on the creation time in epoch milliseconds, bumped
    /// past any existing id so back-to-back creations never collide.
    fn next_folder_id(&self) -> i64 {
        let mut id = Utc::now().timestamp_millis();
        while self.folders.iter().any(|f| f.id == id) {
            id += 1;
        }
        id
    }

    /// Persists the full folder snapshot.
    async fn persist(&self) -> Result<()> {
        self.repository.save(&self.folders).await
    }
}

/// Uppercases the first character of a theme tag for display.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

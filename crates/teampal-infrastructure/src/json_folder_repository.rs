//! JSON file-based FolderRepository implementation.
//!
//! Stores the workspace folder collection as a single JSON snapshot at
//! `{data_dir}/folders.json`.

use crate::atomic_json::AtomicJsonFile;
use crate::paths::TeamPalPaths;
use async_trait::async_trait;
use std::path::Path;
use teampal_core::error::Result;
use teampal_core::workspace::{Folder, FolderRepository};

/// File-backed folder repository.
///
/// The snapshot is written atomically on every save. A malformed snapshot
/// degrades to an empty collection on load, so a corrupt file never takes
/// the workspace down.
pub struct JsonFolderRepository {
    file: AtomicJsonFile<Vec<Folder>>,
}

impl JsonFolderRepository {
    /// Creates a repository at the default location.
    pub fn default_location() -> Result<Self> {
        Self::new(None)
    }

    /// Creates a repository with a custom base directory (for testing).
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let paths = TeamPalPaths::new(base_dir);
        Ok(Self {
            file: AtomicJsonFile::new(paths.folders_file()?),
        })
    }
}

#[async_trait]
impl FolderRepository for JsonFolderRepository {
    async fn load(&self) -> Result<Option<Vec<Folder>>> {
        match self.file.load() {
            Ok(snapshot) => Ok(snapshot),
            Err(err) if err.is_serialization() => {
                tracing::warn!("malformed folder snapshot, starting empty: {err}");
                Ok(Some(Vec::new()))
            }
            Err(err) => Err(err),
        }
    }

    async fn save(&self, folders: &[Folder]) -> Result<()> {
        self.file.save(&folders.to_vec())
    }
}

//! Folder repository trait.
//!
//! Defines the interface for folder/agent persistence operations.

use super::model::Folder;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for persisting the workspace folder collection.
///
/// This trait defines the contract for persisting and retrieving the full
/// folder snapshot, decoupling the workspace logic from the specific storage
/// mechanism (JSON files, browser storage bridge, remote API).
///
/// # Implementation Notes
///
/// Implementations should:
/// - Treat the snapshot as a whole: `save` overwrites any prior state
/// - Degrade malformed snapshots to an empty collection instead of failing
///   the caller (a corrupt snapshot must never take the workspace down)
#[async_trait]
pub trait FolderRepository: Send + Sync {
    /// Loads the persisted folder snapshot.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(folders))`: a snapshot exists (possibly empty if the
    ///   stored data was malformed and got degraded)
    /// - `Ok(None)`: no snapshot has been persisted yet
    /// - `Err(_)`: storage could not be accessed
    async fn load(&self) -> Result<Option<Vec<Folder>>>;

    /// Persists the full folder collection, overwriting any prior snapshot.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: snapshot saved successfully
    /// - `Err(_)`: error occurred during save
    async fn save(&self, folders: &[Folder]) -> Result<()>;
}

//! Board configuration store trait.

use async_trait::async_trait;
use forum_model::BoardSettings;

use crate::error::StorageResult;

/// Read-only access to per-board settings.
#[async_trait]
pub trait BoardSettingsStore: Send + Sync {
    /// Gets the settings for a board.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::NotFound` if the board doesn't exist.
    async fn get(&self, board_id: i32) -> StorageResult<BoardSettings>;
}

//! User directory trait.

use async_trait::async_trait;
use forum_model::UserIdentity;

use crate::error::StorageResult;

/// Read-only lookup of forum users.
///
/// Implementations must be thread-safe and support concurrent access.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Gets a user by id.
    async fn get_by_id(&self, user_id: i32) -> StorageResult<Option<UserIdentity>>;

    /// Gets a user by login name.
    async fn get_by_name(&self, user_name: &str) -> StorageResult<Option<UserIdentity>>;
}

//! Single sign-on status store trait.

use async_trait::async_trait;
use forum_model::IdentityProviderKind;

use crate::error::StorageResult;

/// Records which identity provider a user last authenticated through.
///
/// The flag is advisory metadata: writes overwrite, last writer wins.
#[async_trait]
pub trait SsoStatusStore: Send + Sync {
    /// Durably records that `user_id` authenticated via `provider`.
    async fn update_status(&self, user_id: i32, provider: IdentityProviderKind)
        -> StorageResult<()>;

    /// Gets the provider recorded for `user_id`, if any.
    async fn get_status(&self, user_id: i32) -> StorageResult<Option<IdentityProviderKind>>;
}

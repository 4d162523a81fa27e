//! Group directory trait.

use async_trait::async_trait;
use forum_model::Group;

use crate::error::StorageResult;

/// Read-only access to board groups and their members.
#[async_trait]
pub trait GroupDirectory: Send + Sync {
    /// Lists all groups of a board, in directory order.
    async fn list_groups(&self, board_id: i32) -> StorageResult<Vec<Group>>;

    /// Lists the email addresses of a group's members.
    ///
    /// Addresses are returned as stored; blank entries are possible.
    async fn list_group_member_emails(
        &self,
        board_id: i32,
        group_id: i32,
    ) -> StorageResult<Vec<String>>;
}

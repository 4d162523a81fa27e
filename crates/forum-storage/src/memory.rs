//! In-memory implementations of the storage traits.
//!
//! Used by tests and by the server when no external backend is wired in.

use std::collections::HashMap;

use async_trait::async_trait;
use forum_model::{BoardSettings, Group, IdentityProviderKind, MailMessage, UserIdentity};
use parking_lot::RwLock;

use crate::board::BoardSettingsStore;
use crate::error::{StorageError, StorageResult};
use crate::group::GroupDirectory;
use crate::mail::MailStore;
use crate::sso_status::SsoStatusStore;
use crate::user::UserDirectory;

// ============================================================================
// Users
// ============================================================================

/// In-memory user directory.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<i32, UserIdentity>>,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a user.
    pub fn insert(&self, user: UserIdentity) {
        self.users.write().insert(user.user_id, user);
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn get_by_id(&self, user_id: i32) -> StorageResult<Option<UserIdentity>> {
        Ok(self.users.read().get(&user_id).cloned())
    }

    async fn get_by_name(&self, user_name: &str) -> StorageResult<Option<UserIdentity>> {
        Ok(self
            .users
            .read()
            .values()
            .find(|u| u.user_name == user_name)
            .cloned())
    }
}

// ============================================================================
// Board settings
// ============================================================================

/// In-memory board settings store.
#[derive(Debug, Default)]
pub struct InMemoryBoardSettingsStore {
    boards: RwLock<HashMap<i32, BoardSettings>>,
}

impl InMemoryBoardSettingsStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding a single board.
    #[must_use]
    pub fn with_board(settings: BoardSettings) -> Self {
        let store = Self::new();
        store.insert(settings);
        store
    }

    /// Adds or replaces a board's settings.
    pub fn insert(&self, settings: BoardSettings) {
        self.boards.write().insert(settings.board_id, settings);
    }
}

#[async_trait]
impl BoardSettingsStore for InMemoryBoardSettingsStore {
    async fn get(&self, board_id: i32) -> StorageResult<BoardSettings> {
        self.boards
            .read()
            .get(&board_id)
            .cloned()
            .ok_or_else(|| StorageError::not_found("Board", board_id))
    }
}

// ============================================================================
// Groups
// ============================================================================

/// In-memory group directory.
#[derive(Debug, Default)]
pub struct InMemoryGroupDirectory {
    groups: RwLock<HashMap<i32, Vec<Group>>>,
    members: RwLock<HashMap<(i32, i32), Vec<String>>>,
}

impl InMemoryGroupDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a group to a board's group list.
    pub fn add_group(&self, board_id: i32, group: Group) {
        self.groups.write().entry(board_id).or_default().push(group);
    }

    /// Adds a member address to a group.
    pub fn add_member_email(&self, board_id: i32, group_id: i32, email: impl Into<String>) {
        self.members
            .write()
            .entry((board_id, group_id))
            .or_default()
            .push(email.into());
    }
}

#[async_trait]
impl GroupDirectory for InMemoryGroupDirectory {
    async fn list_groups(&self, board_id: i32) -> StorageResult<Vec<Group>> {
        Ok(self.groups.read().get(&board_id).cloned().unwrap_or_default())
    }

    async fn list_group_member_emails(
        &self,
        board_id: i32,
        group_id: i32,
    ) -> StorageResult<Vec<String>> {
        Ok(self
            .members
            .read()
            .get(&(board_id, group_id))
            .cloned()
            .unwrap_or_default())
    }
}

// ============================================================================
// SSO status
// ============================================================================

/// In-memory single sign-on status store.
#[derive(Debug, Default)]
pub struct InMemorySsoStatusStore {
    statuses: RwLock<HashMap<i32, IdentityProviderKind>>,
}

impl InMemorySsoStatusStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SsoStatusStore for InMemorySsoStatusStore {
    async fn update_status(
        &self,
        user_id: i32,
        provider: IdentityProviderKind,
    ) -> StorageResult<()> {
        self.statuses.write().insert(user_id, provider);
        Ok(())
    }

    async fn get_status(&self, user_id: i32) -> StorageResult<Option<IdentityProviderKind>> {
        Ok(self.statuses.read().get(&user_id).copied())
    }
}

// ============================================================================
// Mail
// ============================================================================

/// In-memory outbound mail queue.
///
/// Rejects recipients that are not plausible addresses (no `@`, or
/// containing whitespace), the way a real queue's constraint would.
#[derive(Debug, Default)]
pub struct InMemoryMailStore {
    queue: RwLock<Vec<MailMessage>>,
}

impl InMemoryMailStore {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all queued messages in order.
    #[must_use]
    pub fn messages(&self) -> Vec<MailMessage> {
        self.queue.read().clone()
    }

    /// Returns the recipients of all queued messages in order.
    #[must_use]
    pub fn recipients(&self) -> Vec<String> {
        self.queue.read().iter().map(|m| m.to.clone()).collect()
    }

    /// Removes all queued messages.
    pub fn clear(&self) {
        self.queue.write().clear();
    }
}

fn is_plausible_address(address: &str) -> bool {
    !address.chars().any(char::is_whitespace)
        && address
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty())
}

#[async_trait]
impl MailStore for InMemoryMailStore {
    async fn enqueue(&self, message: MailMessage) -> StorageResult<()> {
        if !is_plausible_address(&message.to) {
            return Err(StorageError::invalid_data(format!(
                "recipient '{}' is not a valid address",
                message.to
            )));
        }
        tracing::trace!(to = %message.to, "mail queued");
        self.queue.write().push(message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn board_lookup_reports_missing_board() {
        let store = InMemoryBoardSettingsStore::with_board(BoardSettings::new(1, "Main", "f@x.com"));

        assert_eq!(store.get(1).await.unwrap().name, "Main");
        assert!(store.get(2).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn group_directory_keeps_insertion_order() {
        let directory = InMemoryGroupDirectory::new();
        directory.add_group(1, Group::new(2, "Mods"));
        directory.add_group(1, Group::new(3, "Editors"));
        directory.add_member_email(1, 3, "e@x.com");

        let groups = directory.list_groups(1).await.unwrap();
        assert_eq!(groups, vec![Group::new(2, "Mods"), Group::new(3, "Editors")]);
        assert_eq!(
            directory.list_group_member_emails(1, 3).await.unwrap(),
            vec!["e@x.com".to_string()]
        );
        assert!(directory.list_group_member_emails(1, 2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn sso_status_last_write_wins() {
        let store = InMemorySsoStatusStore::new();
        store.update_status(5, IdentityProviderKind::Twitter).await.unwrap();
        store.update_status(5, IdentityProviderKind::Google).await.unwrap();

        assert_eq!(
            store.get_status(5).await.unwrap(),
            Some(IdentityProviderKind::Google)
        );
        assert_eq!(store.get_status(6).await.unwrap(), None);
    }

    #[tokio::test]
    async fn mail_store_rejects_implausible_addresses() {
        let store = InMemoryMailStore::new();

        store
            .enqueue(MailMessage::new("f@x.com", "a@x.com", "s", "b"))
            .await
            .unwrap();
        assert!(store
            .enqueue(MailMessage::new("f@x.com", "bad", "s", "b"))
            .await
            .is_err());
        assert!(store
            .enqueue(MailMessage::new("f@x.com", "a b@x.com", "s", "b"))
            .await
            .is_err());

        assert_eq!(store.recipients(), vec!["a@x.com".to_string()]);
    }

    #[tokio::test]
    async fn user_directory_finds_by_name() {
        let directory = InMemoryUserDirectory::new();
        directory.insert(UserIdentity::new(9, "alice", "a@x.com"));

        let found = directory.get_by_name("alice").await.unwrap().unwrap();
        assert_eq!(found.user_id, 9);
        assert!(directory.get_by_id(10).await.unwrap().is_none());
    }
}

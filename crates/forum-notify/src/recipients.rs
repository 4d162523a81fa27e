//! Notification recipients.

use std::sync::Arc;

use forum_model::AdministratorGroup;
use forum_storage::{BoardSettingsStore, GroupDirectory};

use crate::error::NotifyResult;

/// Separator of the board's registration notification list.
pub const LIST_SEPARATOR: char = ';';

/// Ordered, distinct, non-blank email addresses.
///
/// Addresses are trimmed; blank entries and exact duplicates are dropped,
/// keeping the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientSet {
    addresses: Vec<String>,
}

impl RecipientSet {
    /// Builds a set from individual addresses.
    #[must_use]
    pub fn from_addresses<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for address in addresses {
            let address = address.as_ref().trim();
            if address.is_empty() || set.contains(address) {
                continue;
            }
            set.addresses.push(address.to_string());
        }
        set
    }

    /// Builds a set from a `;`-delimited list.
    #[must_use]
    pub fn from_delimited(list: &str) -> Self {
        Self::from_addresses(list.split(LIST_SEPARATOR))
    }

    /// Returns whether `address` is in the set.
    #[must_use]
    pub fn contains(&self, address: &str) -> bool {
        self.addresses.iter().any(|a| a == address)
    }

    /// Returns the addresses in order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.addresses
    }

    /// Iterates over the addresses in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.addresses.iter().map(String::as_str)
    }

    /// Returns the number of recipients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

/// Computes who receives administrator notifications.
///
/// Every call queries the collaborators again; results are never cached.
#[derive(Clone)]
pub struct RecipientResolver {
    boards: Arc<dyn BoardSettingsStore>,
    groups: Arc<dyn GroupDirectory>,
}

impl std::fmt::Debug for RecipientResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipientResolver").finish_non_exhaustive()
    }
}

impl RecipientResolver {
    /// Creates a resolver.
    #[must_use]
    pub fn new(boards: Arc<dyn BoardSettingsStore>, groups: Arc<dyn GroupDirectory>) -> Self {
        Self { boards, groups }
    }

    /// Returns the board's configured registration notification list.
    ///
    /// ## Errors
    ///
    /// Returns `NotifyError::Lookup` if the board settings cannot be read.
    pub async fn registration_notify_recipients(&self, board_id: i32) -> NotifyResult<RecipientSet> {
        let settings = self.boards.get(board_id).await?;
        Ok(RecipientSet::from_delimited(
            &settings.notification_on_user_register_email_list,
        ))
    }

    /// Resolves the board's administrators group and its members.
    ///
    /// Falls back to group 1 when no group is named exactly
    /// `Administrators`. An empty member list is a valid result.
    ///
    /// ## Errors
    ///
    /// Returns `NotifyError::Lookup` if either directory query fails.
    pub async fn administrator_group(&self, board_id: i32) -> NotifyResult<AdministratorGroup> {
        let groups = self.groups.list_groups(board_id).await?;
        let (group_id, is_fallback) = AdministratorGroup::select_id(&groups);
        if is_fallback {
            tracing::warn!(
                board_id,
                group_id,
                "no group named Administrators, using default group"
            );
        }

        let member_emails = self
            .groups
            .list_group_member_emails(board_id, group_id)
            .await?;

        Ok(AdministratorGroup {
            group_id,
            member_emails,
            is_fallback,
        })
    }

    /// Returns the administrators group's member addresses.
    ///
    /// ## Errors
    ///
    /// Returns `NotifyError::Lookup` if either directory query fails.
    pub async fn spam_bot_notify_recipients(&self, board_id: i32) -> NotifyResult<RecipientSet> {
        let group = self.administrator_group(board_id).await?;
        Ok(RecipientSet::from_addresses(&group.member_emails))
    }
}

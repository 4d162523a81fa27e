//! Board groups.

use serde::{Deserialize, Serialize};

/// Name of the group whose members receive spam-bot notices.
pub const ADMINISTRATORS_GROUP_NAME: &str = "Administrators";

/// Group id assumed when no group is named [`ADMINISTRATORS_GROUP_NAME`].
pub const DEFAULT_ADMIN_GROUP_ID: i32 = 1;

/// A board group as listed by the group directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group identifier.
    pub group_id: i32,
    /// Group name. May be empty for legacy rows.
    pub name: String,
}

impl Group {
    /// Creates a group.
    #[must_use]
    pub fn new(group_id: i32, name: impl Into<String>) -> Self {
        Self {
            group_id,
            name: name.into(),
        }
    }

    /// Returns whether this is the administrators group (exact name match).
    #[must_use]
    pub fn is_administrators(&self) -> bool {
        self.name == ADMINISTRATORS_GROUP_NAME
    }
}

/// The resolved administrator group and its member addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdministratorGroup {
    /// Group identifier (possibly the default).
    pub group_id: i32,
    /// Member email addresses as returned by the directory.
    pub member_emails: Vec<String>,
    /// Whether the default id was used because no group matched by name.
    pub is_fallback: bool,
}

impl AdministratorGroup {
    /// Picks the administrators group from a board's group list.
    ///
    /// Returns `(group_id, is_fallback)`; the first exact name match wins,
    /// otherwise [`DEFAULT_ADMIN_GROUP_ID`].
    #[must_use]
    pub fn select_id(groups: &[Group]) -> (i32, bool) {
        groups
            .iter()
            .find(|g| g.is_administrators())
            .map_or((DEFAULT_ADMIN_GROUP_ID, true), |g| (g.group_id, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_exact_name_match() {
        let groups = vec![Group::new(2, "Mods"), Group::new(7, "Administrators")];
        assert_eq!(AdministratorGroup::select_id(&groups), (7, false));
    }

    #[test]
    fn name_match_is_case_sensitive() {
        let groups = vec![Group::new(4, "administrators"), Group::new(5, "")];
        assert_eq!(
            AdministratorGroup::select_id(&groups),
            (DEFAULT_ADMIN_GROUP_ID, true)
        );
    }

    #[test]
    fn first_match_wins() {
        let groups = vec![
            Group::new(9, "Administrators"),
            Group::new(3, "Administrators"),
        ];
        assert_eq!(AdministratorGroup::select_id(&groups), (9, false));
    }
}

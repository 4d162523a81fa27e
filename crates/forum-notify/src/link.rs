//! Links into the admin area.

/// Builds unescaped deep links into the admin area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminLinkBuilder {
    base_url: String,
}

impl AdminLinkBuilder {
    /// Creates a builder for the forum at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Link to the admin "edit user" page for `user_id`.
    #[must_use]
    pub fn edit_user(&self, user_id: i32) -> String {
        format!("{}/admin/edituser?u={user_id}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_user_link() {
        let links = AdminLinkBuilder::new("https://forum.example.com/");
        assert_eq!(links.edit_user(42), "https://forum.example.com/admin/edituser?u=42");
    }
}

//! Localized text lookup.

use std::collections::HashMap;

use crate::defaults;

/// Source of localized texts, addressed by page and tag.
pub trait Localization: Send + Sync {
    /// Returns the text for `tag` on `page`, if any.
    fn get_text(&self, page: &str, tag: &str) -> Option<String>;
}

/// English texts, optionally overridden per tag.
#[derive(Debug, Clone)]
pub struct DefaultLocalization {
    texts: HashMap<(String, String), String>,
}

impl DefaultLocalization {
    /// Creates a source holding the built-in texts.
    #[must_use]
    pub fn new() -> Self {
        let texts = defaults::TEXTS
            .iter()
            .map(|(page, tag, text)| ((page.to_string(), tag.to_string()), text.to_string()))
            .collect();
        Self { texts }
    }

    /// Creates a source with no texts at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            texts: HashMap::new(),
        }
    }

    /// Sets or replaces one text.
    #[must_use]
    pub fn with_text(mut self, page: &str, tag: &str, text: impl Into<String>) -> Self {
        self.texts
            .insert((page.to_string(), tag.to_string()), text.into());
        self
    }
}

impl Default for DefaultLocalization {
    fn default() -> Self {
        Self::new()
    }
}

impl Localization for DefaultLocalization {
    fn get_text(&self, page: &str, tag: &str) -> Option<String> {
        self.texts
            .get(&(page.to_string(), tag.to_string()))
            .cloned()
    }
}

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Translation table for the fixed phrases the helpers emit.
///
/// Missing keys translate to themselves, so an empty catalog renders English.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn gettext(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    pub fn ngettext(&self, singular: &str, plural: &str, n: i64) -> String {
        if n == 1 {
            self.gettext(singular)
        } else {
            self.gettext(plural)
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let catalog = Catalog::new();
        assert_eq!(catalog.gettext("never"), "never");
    }

    #[test]
    fn test_translated_key() {
        let catalog = Catalog::new().with("never", "jamais").with("days", "jours");
        assert_eq!(catalog.gettext("never"), "jamais");
        assert_eq!(catalog.ngettext("day", "days", 3), "jours");
        assert_eq!(catalog.ngettext("day", "days", 1), "day");
        assert_eq!(catalog.len(), 2);
    }
}

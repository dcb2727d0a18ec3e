use std::collections::BTreeMap;

use crate::model::ids::SchemaKey;

/// One table of a schema, as listed for the user and named in prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry {
    pub html: String,
    pub tables: Vec<String>,
}

/// Maps schema keys to their rich-text descriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaCatalog {
    entries: BTreeMap<SchemaKey, SchemaEntry>,
}

impl SchemaCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema. A later insert with the same key replaces the earlier one.
    #[must_use]
    pub fn with_schema(
        mut self,
        key: SchemaKey,
        html: impl Into<String>,
        tables: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.entries.insert(
            key,
            SchemaEntry {
                html: html.into(),
                tables: tables.into_iter().map(Into::into).collect(),
            },
        );
        self
    }

    #[must_use]
    pub fn html(&self, key: &SchemaKey) -> Option<&str> {
        self.entries.get(key).map(|entry| entry.html.as_str())
    }

    #[must_use]
    pub fn tables(&self, key: &SchemaKey) -> &[String] {
        self.entries
            .get(key)
            .map_or(&[], |entry| entry.tables.as_slice())
    }

    #[must_use]
    pub fn contains(&self, key: &SchemaKey) -> bool {
        self.entries.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_key() {
        let catalog = SchemaCatalog::new().with_schema(
            SchemaKey::new("main"),
            "<div>orders</div>",
            ["orders"],
        );
        assert!(catalog.contains(&SchemaKey::new("main")));
        assert_eq!(catalog.html(&SchemaKey::new("main")), Some("<div>orders</div>"));
        assert_eq!(catalog.tables(&SchemaKey::new("main")), ["orders".to_string()]);
        assert!(catalog.html(&SchemaKey::new("other")).is_none());
        assert!(catalog.tables(&SchemaKey::new("other")).is_empty());
    }
}

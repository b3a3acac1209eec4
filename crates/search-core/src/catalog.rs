// search-core/src/catalog.rs
//! Immutable content catalog
//!
//! The catalog is built once at startup and shared read-only. Lower-cased
//! copies of the matchable fields are computed at construction so a search
//! never allocates per entry.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::error::CatalogError;
use crate::models::{ContentEntry, EntryId};

const BUILTIN_CATALOG: &str = include_str!("../catalog.toml");

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    entries: Vec<ContentEntry>,
}

#[derive(Debug)]
pub(crate) struct IndexedEntry {
    pub(crate) entry: ContentEntry,
    title_lower: String,
    content_lower: String,
}

impl IndexedEntry {
    fn new(entry: ContentEntry) -> Self {
        Self {
            title_lower: entry.title.to_lowercase(),
            content_lower: entry.content.to_lowercase(),
            entry,
        }
    }

    /// `needle` must already be lower-cased.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.title_lower.contains(needle) || self.content_lower.contains(needle)
    }
}

#[derive(Debug)]
pub struct Catalog {
    entries: Vec<IndexedEntry>,
}

impl Catalog {
    /// Build a catalog, keeping insertion order. Ids must be unique.
    pub fn new(entries: Vec<ContentEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(CatalogError::DuplicateId(entry.id));
            }
            if !entry.is_discoverable() {
                tracing::warn!(id = entry.id, "catalog entry has no title or content and can never match");
            }
        }

        Ok(Self {
            entries: entries.into_iter().map(IndexedEntry::new).collect(),
        })
    }

    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::new(file.entries)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&ContentEntry> {
        self.iter().find(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentEntry> {
        self.entries.iter().map(|indexed| &indexed.entry)
    }

    pub(crate) fn indexed(&self) -> &[IndexedEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.iter().all(ContentEntry::is_discoverable));
    }

    #[test]
    fn keeps_insertion_order() {
        let catalog = Catalog::new(vec![
            ContentEntry::new(7, "b", "Blog Post", "/b", "b"),
            ContentEntry::new(3, "a", "Blog Post", "/a", "a"),
        ])
        .unwrap();
        let ids: Vec<_> = catalog.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![7, 3]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = Catalog::new(vec![
            ContentEntry::new(1, "a", "Documentation", "/a", "a"),
            ContentEntry::new(1, "b", "Documentation", "/b", "b"),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn parses_type_and_optional_category() {
        let catalog = Catalog::from_toml_str(
            r#"
[[entries]]
id = 1
title = "Backups"
type = "Documentation"
path = "/resources/backups"
content = "Point in time recovery"
category = "Operations"

[[entries]]
id = 2
title = "Replication"
type = "Blog Post"
path = "/resources/replication"
content = "Streaming replicas"
"#,
        )
        .unwrap();

        let first = catalog.get(1).unwrap();
        assert_eq!(first.kind, "Documentation");
        assert_eq!(first.category.as_deref(), Some("Operations"));
        assert_eq!(catalog.get(2).unwrap().category, None);
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::load(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(
            &path,
            "[[entries]]\nid = 9\ntitle = \"Sharding\"\ntype = \"Guide\"\npath = \"/s\"\ncontent = \"x\"\n",
        )
        .unwrap();
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
    }
}

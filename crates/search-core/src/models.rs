// search-core/src/models.rs
//! Data model for searchable site content

use serde::{Deserialize, Serialize};

/// Stable identifier of a catalog entry, used as a list key.
pub type EntryId = u32;

/// A piece of site content that search can find.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub id: EntryId,
    pub title: String,
    /// Free-form label such as "Documentation" or "Blog Post"
    #[serde(rename = "type")]
    pub kind: String,
    /// Route handed to navigation when the entry is selected
    pub path: String,
    /// Body text used for matching, never rendered in results
    pub content: String,
    /// Secondary label shown next to `kind`
    #[serde(default)]
    pub category: Option<String>,
}

impl ContentEntry {
    pub fn new(
        id: EntryId,
        title: impl Into<String>,
        kind: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            kind: kind.into(),
            path: path.into(),
            content: content.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// An entry with neither title nor content can never match a non-blank query.
    pub fn is_discoverable(&self) -> bool {
        !self.title.trim().is_empty() || !self.content.trim().is_empty()
    }
}

//! Per-surface query state

use search_core::ContentEntry;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display)]
pub enum SearchPhase {
    /// No query. The resting state.
    #[default]
    Idle,
    /// A keystroke arrived and the quiet-window timer is running
    Debouncing,
    /// A search was issued and has not answered yet
    Pending,
    /// Results (possibly none, possibly a failure) are available
    Resolved,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    /// Input text exactly as typed
    pub raw_query: String,
    /// Results of the last applied search, in catalog order
    pub results: Vec<ContentEntry>,
    /// The trimmed query that produced `results`
    pub resolved_query: String,
    pub is_pending: bool,
    pub is_open: bool,
    pub phase: SearchPhase,
    /// Set when the last applied search failed in transport
    pub error: Option<String>,
}

impl QueryState {
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }

    pub fn entry(&self, id: search_core::EntryId) -> Option<&ContentEntry> {
        self.results.iter().find(|entry| entry.id == id)
    }

    pub(crate) fn reset(&mut self) {
        self.raw_query.clear();
        self.results.clear();
        self.resolved_query.clear();
        self.is_pending = false;
        self.is_open = false;
        self.phase = SearchPhase::Idle;
        self.error = None;
    }
}

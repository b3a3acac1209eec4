//! What a surface should render for a given query state

use search_core::{ContentEntry, EntryId};

use crate::state::{QueryState, SearchPhase};

/// Shown on transport failure. The user retries by editing the query.
pub const FAILURE_MESSAGE: &str = "Search is unavailable right now. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub id: EntryId,
    pub title: String,
    /// `type`, or `type · category` when the entry has a category
    pub label: String,
    pub path: String,
}

impl From<&ContentEntry> for ResultItem {
    fn from(entry: &ContentEntry) -> Self {
        let label = match entry.category.as_deref().map(str::trim) {
            Some(category) if !category.is_empty() => format!("{} · {}", entry.kind, category),
            _ => entry.kind.clone(),
        };
        Self {
            id: entry.id,
            title: entry.title.clone(),
            label,
            path: entry.path.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    /// Nothing typed, or the surface is closed
    Hidden,
    /// Waiting for the first answer to this query
    Loading,
    Results {
        items: Vec<ResultItem>,
        /// Matches left out by the preview limit
        remaining: usize,
        /// A newer query is being debounced or searched
        refreshing: bool,
    },
    NoResults { query: String },
    Failed { message: String },
}

impl DisplayState {
    pub fn from_state(state: &QueryState, preview_limit: Option<usize>) -> Self {
        if !state.is_open || state.phase == SearchPhase::Idle {
            return DisplayState::Hidden;
        }

        let refreshing = matches!(state.phase, SearchPhase::Debouncing | SearchPhase::Pending);

        if state.results.is_empty() {
            if refreshing {
                return DisplayState::Loading;
            }
            if state.failed() {
                return DisplayState::Failed {
                    message: FAILURE_MESSAGE.to_string(),
                };
            }
            return DisplayState::NoResults {
                query: state.resolved_query.clone(),
            };
        }

        let shown = preview_limit.unwrap_or(state.results.len()).min(state.results.len());
        DisplayState::Results {
            items: state.results[..shown].iter().map(ResultItem::from).collect(),
            remaining: state.results.len() - shown,
            refreshing,
        }
    }
}

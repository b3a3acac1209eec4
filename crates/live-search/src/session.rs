//! Debounced query state machine
//!
//! `QuerySession` owns nothing asynchronous. Each call returns the effects
//! the caller must carry out (start a timer, issue or cancel a search), and
//! every timer expiry or search answer is fed back tagged with the
//! [`Generation`] it was started for. Only the generation currently in
//! flight may change the results, so an answer to a superseded query is
//! dropped no matter when it arrives.

use std::time::Duration;

use search_core::{ContentEntry, Query, SearchError};
use tracing::{debug, warn};

use crate::state::{QueryState, SearchPhase};

/// Sequence number of a keystroke. Newer keystrokes have larger generations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("#{_0}")]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Generation(self.0 + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start (or restart) the quiet-window timer
    StartTimer { generation: Generation, delay: Duration },
    /// Drop any running timer
    StopTimer,
    /// Run the search for `query`
    Issue { generation: Generation, query: String },
    /// Signal the cancellation token of a superseded search
    Cancel { generation: Generation },
}

#[derive(Debug)]
pub struct QuerySession {
    state: QueryState,
    debounce: Duration,
    generation: Generation,
    in_flight: Option<Generation>,
    /// The current query was already re-issued once after an outside cancel
    retried: bool,
}

/// Reported when the backend cancels the same query twice in a row.
pub const CANCELLED_MESSAGE: &str = "search was cancelled by the backend";

impl QuerySession {
    pub fn new(debounce: Duration) -> Self {
        Self {
            state: QueryState::default(),
            debounce,
            generation: Generation::default(),
            in_flight: None,
            retried: false,
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn in_flight(&self) -> Option<Generation> {
        self.in_flight
    }

    /// The input text changed to `text`.
    ///
    /// Entering the same text again only counts after a failed search, so
    /// the user can retry by re-entering the query.
    pub fn input(&mut self, text: &str) -> Vec<Effect> {
        let retry = self.state.phase == SearchPhase::Resolved && self.state.failed();
        if text == self.state.raw_query && !retry {
            return Vec::new();
        }

        let mut effects = self.supersede();
        self.retried = false;

        if text.trim().is_empty() {
            debug!("query emptied, returning to idle");
            self.state.reset();
            self.state.raw_query = text.to_string();
            effects.push(Effect::StopTimer);
            return effects;
        }

        self.state.raw_query = text.to_string();
        self.state.phase = SearchPhase::Debouncing;
        self.state.is_pending = false;
        self.state.is_open = true;
        effects.push(Effect::StartTimer {
            generation: self.generation,
            delay: self.debounce,
        });
        effects
    }

    /// The timer started for `generation` ran out.
    pub fn timer_elapsed(&mut self, generation: Generation) -> Vec<Effect> {
        if generation != self.generation || self.state.phase != SearchPhase::Debouncing {
            debug!(%generation, current = %self.generation, "ignoring stale debounce timer");
            return Vec::new();
        }

        let Some(query) = Query::parse(&self.state.raw_query) else {
            self.state.reset();
            return Vec::new();
        };

        self.state.phase = SearchPhase::Pending;
        self.state.is_pending = true;
        self.in_flight = Some(generation);
        vec![Effect::Issue {
            generation,
            query: query.text().to_string(),
        }]
    }

    /// A search issued for `generation` answered.
    ///
    /// Returns `None` when the answer belongs to a superseded search and was
    /// dropped, otherwise the effects to carry out.
    pub fn complete(
        &mut self,
        generation: Generation,
        outcome: Result<Vec<ContentEntry>, SearchError>,
    ) -> Option<Vec<Effect>> {
        if self.in_flight != Some(generation) {
            debug!(%generation, "discarding answer to a superseded search");
            return None;
        }

        self.in_flight = None;
        self.state.is_pending = false;

        // Cancelled by someone other than this session. Nothing was answered,
        // so go back to debouncing and ask once more after the quiet window.
        if matches!(outcome, Err(SearchError::Cancelled)) && !self.retried {
            debug!(%generation, "search cancelled externally, retrying");
            self.retried = true;
            self.generation = self.generation.next();
            self.state.phase = SearchPhase::Debouncing;
            return Some(vec![Effect::StartTimer {
                generation: self.generation,
                delay: self.debounce,
            }]);
        }

        self.state.phase = SearchPhase::Resolved;
        match outcome {
            Ok(results) => {
                debug!(%generation, hits = results.len(), "search resolved");
                self.state.results = results;
                self.state.resolved_query = self.state.raw_query.trim().to_string();
                self.state.error = None;
            }
            Err(SearchError::Cancelled) => {
                warn!(%generation, "search cancelled externally twice, giving up");
                self.fail(CANCELLED_MESSAGE.to_string());
            }
            Err(SearchError::Transport(message)) => {
                warn!(%generation, "search failed: {message}");
                self.fail(message);
            }
        }
        Some(Vec::new())
    }

    fn fail(&mut self, message: String) {
        self.state.results.clear();
        self.state.resolved_query = self.state.raw_query.trim().to_string();
        self.state.error = Some(message);
    }

    /// Explicit clear: back to idle at once, whatever is in flight.
    pub fn clear(&mut self) -> Vec<Effect> {
        let mut effects = self.supersede();
        self.retried = false;
        self.state.reset();
        effects.push(Effect::StopTimer);
        effects
    }

    pub fn set_open(&mut self, open: bool) {
        self.state.is_open = open;
    }

    /// Invalidate every timer and search started so far.
    fn supersede(&mut self) -> Vec<Effect> {
        self.generation = self.generation.next();
        match self.in_flight.take() {
            Some(generation) => {
                debug!(%generation, "cancelling superseded search");
                vec![Effect::Cancel { generation }]
            }
            None => Vec::new(),
        }
    }
}

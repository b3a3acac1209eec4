//! Runs a [`QuerySession`] on the tokio runtime
//!
//! Each surface gets its own driver task. Keystrokes reach it through an
//! [`AdapterHandle`]; timers and searches run as separate tasks and report
//! back on an internal channel, so the session itself is only ever touched
//! by the driver task.

use std::sync::Arc;
use std::time::Duration;

use search_core::{ContentEntry, EntryId, SearchBackend, SearchError};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::navigate::Navigator;
use crate::session::{Effect, Generation, QuerySession};
use crate::state::QueryState;
use crate::surface::{AdapterOptions, Surface};
use crate::view::DisplayState;

#[derive(Debug)]
enum Command {
    Input(String),
    Clear,
    SetOpen(bool),
}

#[derive(Debug)]
enum Event {
    TimerElapsed(Generation),
    Completed {
        generation: Generation,
        outcome: Result<Vec<ContentEntry>, SearchError>,
    },
}

/// Start a search adapter for `surface` on the current tokio runtime.
pub fn spawn_adapter(
    backend: Arc<dyn SearchBackend>,
    surface: Surface,
    options: AdapterOptions,
) -> AdapterHandle {
    let (tx_command, rx_command) = mpsc::unbounded_channel();
    let (tx_event, rx_event) = mpsc::unbounded_channel();
    let (tx_state, rx_state) = watch::channel(QueryState::default());

    let driver = Driver {
        session: QuerySession::new(options.debounce),
        backend,
        request_timeout: options.request_timeout,
        tx_event,
        tx_state,
        timer: None,
        in_flight: None,
        surface,
    };
    let task = tokio::spawn(driver.run(rx_command, rx_event));

    AdapterHandle {
        surface,
        preview_limit: options.preview_limit,
        tx_command,
        rx_state,
        task,
    }
}

/// The UI side of a running adapter.
pub struct AdapterHandle {
    surface: Surface,
    preview_limit: Option<usize>,
    tx_command: mpsc::UnboundedSender<Command>,
    rx_state: watch::Receiver<QueryState>,
    task: JoinHandle<()>,
}

impl AdapterHandle {
    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// The search box now contains `text`.
    pub fn input(&self, text: impl Into<String>) {
        self.send(Command::Input(text.into()));
    }

    /// Reset query and results without waiting for in-flight work.
    pub fn clear(&self) {
        self.send(Command::Clear);
    }

    pub fn set_open(&self, open: bool) {
        self.send(Command::SetOpen(open));
    }

    pub fn state(&self) -> QueryState {
        self.rx_state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<QueryState> {
        self.rx_state.clone()
    }

    pub fn display(&self) -> DisplayState {
        DisplayState::from_state(&self.rx_state.borrow(), self.preview_limit)
    }

    pub fn preview_limit(&self) -> Option<usize> {
        self.preview_limit
    }

    /// Hand the route of result `id` to `navigator`.
    ///
    /// Picks from the last published state, which is what the user sees.
    /// Keystrokes still queued for the driver have not replaced those
    /// results yet. Returns false when `id` is not among them.
    pub fn select(&self, id: EntryId, navigator: &dyn Navigator) -> bool {
        let path = match self.rx_state.borrow().entry(id) {
            Some(entry) => entry.path.clone(),
            None => return false,
        };
        navigator.navigate(&path);
        if self.surface.closes_on_select() {
            self.set_open(false);
        }
        true
    }

    /// Stop the driver, cancelling whatever it has in flight.
    pub async fn shutdown(self) {
        let Self { tx_command, task, .. } = self;
        drop(tx_command);
        if let Err(e) = task.await {
            debug!("search adapter task ended abnormally: {e}");
        }
    }

    fn send(&self, command: Command) {
        if self.tx_command.send(command).is_err() {
            debug!(surface = %self.surface, "search adapter is no longer running");
        }
    }
}

struct Driver {
    session: QuerySession,
    backend: Arc<dyn SearchBackend>,
    request_timeout: Option<Duration>,
    tx_event: mpsc::UnboundedSender<Event>,
    tx_state: watch::Sender<QueryState>,
    timer: Option<JoinHandle<()>>,
    in_flight: Option<(Generation, CancellationToken)>,
    surface: Surface,
}

impl Driver {
    async fn run(
        mut self,
        mut rx_command: mpsc::UnboundedReceiver<Command>,
        mut rx_event: mpsc::UnboundedReceiver<Event>,
    ) {
        debug!(surface = %self.surface, "search adapter started");
        loop {
            let effects = tokio::select! {
                command = rx_command.recv() => match command {
                    Some(command) => self.handle_command(command),
                    None => break,
                },
                Some(event) = rx_event.recv() => self.handle_event(event),
            };
            for effect in effects {
                self.execute(effect);
            }
            self.publish();
        }

        self.stop_timer();
        if let Some((_, token)) = self.in_flight.take() {
            token.cancel();
        }
        debug!(surface = %self.surface, "search adapter stopped");
    }

    fn handle_command(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::Input(text) => {
                debug!(surface = %self.surface, query = %text, "input changed");
                self.session.input(&text)
            }
            Command::Clear => self.session.clear(),
            Command::SetOpen(open) => {
                self.session.set_open(open);
                Vec::new()
            }
        }
    }

    fn handle_event(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::TimerElapsed(generation) => self.session.timer_elapsed(generation),
            Event::Completed { generation, outcome } => {
                if self.in_flight.as_ref().is_some_and(|(g, _)| *g == generation) {
                    self.in_flight = None;
                }
                self.session.complete(generation, outcome).unwrap_or_default()
            }
        }
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::StartTimer { generation, delay } => {
                self.stop_timer();
                let tx_event = self.tx_event.clone();
                self.timer = Some(tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx_event.send(Event::TimerElapsed(generation));
                }));
            }
            Effect::StopTimer => self.stop_timer(),
            Effect::Issue { generation, query } => self.issue(generation, query),
            Effect::Cancel { generation } => {
                if self.in_flight.as_ref().is_some_and(|(g, _)| *g == generation) {
                    if let Some((_, token)) = self.in_flight.take() {
                        token.cancel();
                    }
                }
            }
        }
    }

    fn issue(&mut self, generation: Generation, query: String) {
        debug!(surface = %self.surface, %generation, query = %query, "issuing search");
        let token = CancellationToken::new();
        self.in_flight = Some((generation, token.clone()));

        let backend = Arc::clone(&self.backend);
        let tx_event = self.tx_event.clone();
        let request_timeout = self.request_timeout;
        tokio::spawn(async move {
            let search = backend.search(&query, &token);
            let outcome = match request_timeout {
                Some(limit) => match tokio::time::timeout(limit, search).await {
                    Ok(outcome) => outcome,
                    Err(_) => Err(SearchError::Transport(format!(
                        "timed out after {}ms",
                        limit.as_millis()
                    ))),
                },
                None => search.await,
            };
            let _ = tx_event.send(Event::Completed { generation, outcome });
        });
    }

    fn stop_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    fn publish(&self) {
        let next = self.session.state();
        self.tx_state.send_if_modified(|current| {
            if current == next {
                return false;
            }
            *current = next.clone();
            true
        });
    }
}

//! Search-as-you-type for the site's search surfaces.
//!
//! Every surface (header dropdown, standalone widget, results page) runs
//! its own adapter: a [`QuerySession`] state machine driven by a tokio task.
//! Adapters share a [`search_core::SearchBackend`] and nothing else.

pub mod driver;
pub mod navigate;
pub mod session;
pub mod state;
pub mod surface;
pub mod view;

pub use driver::{AdapterHandle, spawn_adapter};
pub use navigate::Navigator;
pub use session::{CANCELLED_MESSAGE, Effect, Generation, QuerySession};
pub use state::{QueryState, SearchPhase};
pub use surface::{AdapterOptions, Surface};
pub use view::{DisplayState, FAILURE_MESSAGE, ResultItem};

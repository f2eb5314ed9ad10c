//! Watch Mode
//!
//! Long-lived loop that re-runs a sync pass after the agents tree changes.
//! Bursts of filesystem events collapse into one pass through a two-state
//! debounce: any relevant event (re)arms a single deadline, and the pass runs
//! once the deadline passes with no further events.

mod events;
mod runtime;

pub use events::{DebounceState, WatchConfig, DEFAULT_IGNORE_PATTERNS};
pub use runtime::{Subscriptions, WatchDaemon};

//! Search-and-fetch state machine.
//!
//! Turns a free-text username into a profile, a "not found" message, a
//! rate-limit message, or a generic error.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - `SearchState` (Idle → Loading → terminal status)
//! - `intent.rs` - Query edits, submission, lookup settlement
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `outcome.rs` - Classification of one lookup result
//! - `controller.rs` - Drives the reducer and the single upstream call

mod controller;
mod intent;
mod outcome;
mod reducer;
mod state;

pub use controller::{lookup, PendingLookup, SearchController};
pub use intent::SearchIntent;
pub use outcome::{FailureKind, LookupOutcome};
pub use reducer::SearchReducer;
pub use state::{
    SearchState, SearchStatus, GENERIC_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE,
    NOT_FOUND_MESSAGE, RATE_LIMITED_MESSAGE,
};

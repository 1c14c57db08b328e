//! Model-View-Intent (MVI) architecture primitives.
//!
//! Base traits for unidirectional data flow. State is never mutated in
//! place by callers; every change goes through a reducer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of what the view shows
//! - **Intent**: User actions or system events (lookup settled)
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

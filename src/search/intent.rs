//! Intents for the search state machine.

use crate::mvi::Intent;
use crate::search::outcome::LookupOutcome;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchIntent {
    /// Replace the pending query. Allowed in every status.
    SetQuery { text: String },

    /// Form submitted. Ignored for a blank query or while a lookup is in flight.
    Submit,

    /// The lookup tagged with `generation` finished.
    /// Settlements for any other generation are stale and dropped.
    Settled {
        generation: u64,
        outcome: LookupOutcome,
    },
}

impl Intent for SearchIntent {}

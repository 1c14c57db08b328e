//! Reducer for the search state machine.

use crate::mvi::Reducer;
use crate::search::intent::SearchIntent;
use crate::search::outcome::LookupOutcome;
use crate::search::state::{SearchPhase, SearchState};

/// Pure transition function for `SearchState`.
///
/// Issuing the request belongs to the caller, which checks
/// `SearchState::can_submit` before dispatching `Submit`.
pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::SetQuery { text } => SearchState {
                query: text,
                ..state
            },

            SearchIntent::Submit => {
                if !state.can_submit() {
                    return state;
                }
                let login = state.query.trim().to_string();
                SearchState {
                    phase: SearchPhase::Loading { login },
                    generation: state.generation.wrapping_add(1),
                    ..state
                }
            }

            SearchIntent::Settled {
                generation,
                outcome,
            } => {
                if !state.is_loading() || state.generation != generation {
                    return state;
                }
                let phase = match outcome {
                    LookupOutcome::Found(profile) => SearchPhase::Success(profile),
                    LookupOutcome::NotFound => SearchPhase::NotFound,
                    LookupOutcome::RateLimited => SearchPhase::RateLimited,
                    LookupOutcome::Failed(kind) => SearchPhase::Failed(kind),
                };
                SearchState { phase, ..state }
            }
        }
    }
}

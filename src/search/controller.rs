use tracing::{info, warn};

use crate::github::ProfileSource;
use crate::mvi::Reducer;
use crate::search::intent::SearchIntent;
use crate::search::outcome::{FailureKind, LookupOutcome};
use crate::search::reducer::SearchReducer;
use crate::search::state::SearchState;

/// A lookup accepted by `SearchController::begin_submit` that still has
/// to be performed and settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    pub generation: u64,
    pub login: String,
}

/// Owns one `SearchState` and drives it through the reducer.
///
/// `submit` issues exactly one `ProfileSource::fetch_profile` call per
/// accepted submission. Callers that run the request elsewhere (the TUI
/// worker) use `begin_submit` and `settle` instead.
pub struct SearchController<S> {
    source: S,
    state: SearchState,
}

impl<S: ProfileSource> SearchController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: SearchState::default(),
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        dispatch(&mut self.state, SearchIntent::SetQuery { text: text.into() });
    }

    /// Moves to `Loading` and returns the lookup to run, or `None` when
    /// the submission was rejected (blank query, lookup in flight).
    pub fn begin_submit(&mut self) -> Option<PendingLookup> {
        if !self.state.can_submit() {
            return None;
        }
        dispatch(&mut self.state, SearchIntent::Submit);
        let login = self.state.pending_login()?.to_string();
        Some(PendingLookup {
            generation: self.state.generation(),
            login,
        })
    }

    pub fn settle(&mut self, generation: u64, outcome: LookupOutcome) {
        dispatch(
            &mut self.state,
            SearchIntent::Settled {
                generation,
                outcome,
            },
        );
    }

    /// Runs a full submission and returns the settled state.
    ///
    /// If this future is dropped or unwinds mid-request, the lookup is
    /// settled as a network failure on the way out.
    pub async fn submit(&mut self) -> &SearchState {
        let Some(pending) = self.begin_submit() else {
            return &self.state;
        };
        let generation = pending.generation;

        let source = &self.source;
        let mut state = scopeguard::guard(&mut self.state, move |state| {
            // No-op once the real outcome has been applied.
            dispatch(
                state,
                SearchIntent::Settled {
                    generation,
                    outcome: LookupOutcome::Failed(FailureKind::Network),
                },
            );
        });

        let outcome = lookup(source, &pending.login).await;
        dispatch(
            &mut **state,
            SearchIntent::Settled {
                generation,
                outcome,
            },
        );
        drop(state);

        &self.state
    }
}

fn dispatch(state: &mut SearchState, intent: SearchIntent) {
    *state = SearchReducer::reduce(std::mem::take(state), intent);
}

/// Performs one fetch and classifies the result.
pub async fn lookup<S: ProfileSource + ?Sized>(source: &S, login: &str) -> LookupOutcome {
    info!(login, "looking up profile");
    let result = source.fetch_profile(login).await;
    if let Err(err) = &result {
        warn!(login, kind = err.kind(), error = %err, "profile lookup failed");
    } else {
        info!(login, "profile found");
    }
    LookupOutcome::from(result)
}

use crate::github::Profile;
use crate::mvi::UiState;
use crate::search::outcome::FailureKind;

pub const NOT_FOUND_MESSAGE: &str = "User not found. Please try another username.";
pub const RATE_LIMITED_MESSAGE: &str = "Rate limit exceeded. Please try again later.";
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Check your connection and try again.";

/// Coarse status consumed by views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Loading,
    Success,
    NotFound,
    RateLimited,
    Error,
}

/// Where the current submission is. Variants carry exactly the data the
/// view may show, so a profile and an error message never coexist.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading {
        login: String,
    },
    Success(Profile),
    NotFound,
    RateLimited,
    Failed(FailureKind),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub(crate) query: String,
    pub(crate) phase: SearchPhase,
    /// Incremented by every accepted submission.
    pub(crate) generation: u64,
}

impl UiState for SearchState {}

impl SearchState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn status(&self) -> SearchStatus {
        match self.phase {
            SearchPhase::Idle => SearchStatus::Idle,
            SearchPhase::Loading { .. } => SearchStatus::Loading,
            SearchPhase::Success(_) => SearchStatus::Success,
            SearchPhase::NotFound => SearchStatus::NotFound,
            SearchPhase::RateLimited => SearchStatus::RateLimited,
            SearchPhase::Failed(_) => SearchStatus::Error,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SearchPhase::Loading { .. })
    }

    /// Login of the in-flight lookup.
    pub fn pending_login(&self) -> Option<&str> {
        match &self.phase {
            SearchPhase::Loading { login } => Some(login),
            _ => None,
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        match &self.phase {
            SearchPhase::Success(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self.phase {
            SearchPhase::NotFound => Some(NOT_FOUND_MESSAGE),
            SearchPhase::RateLimited => Some(RATE_LIMITED_MESSAGE),
            SearchPhase::Failed(FailureKind::Upstream) => Some(GENERIC_ERROR_MESSAGE),
            // Unparseable 2xx bodies read as a connectivity problem to the user.
            SearchPhase::Failed(FailureKind::Network | FailureKind::MalformedPayload) => {
                Some(NETWORK_ERROR_MESSAGE)
            }
            SearchPhase::Idle | SearchPhase::Loading { .. } | SearchPhase::Success(_) => None,
        }
    }

    /// True when the next `Submit` would start a lookup: the trimmed
    /// query is non-empty and nothing is in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.query.trim().is_empty()
    }
}

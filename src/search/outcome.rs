use crate::github::{FetchError, Profile};

/// Non-success outcome of a lookup that ends in `SearchStatus::Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Upstream answered with a non-2xx status other than 403/404.
    Upstream,
    /// The request never completed.
    Network,
    /// Upstream answered 2xx but the body is not a profile.
    MalformedPayload,
}

/// Result of one lookup, reduced to what the state machine needs.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(Profile),
    NotFound,
    RateLimited,
    Failed(FailureKind),
}

impl From<Result<Profile, FetchError>> for LookupOutcome {
    fn from(result: Result<Profile, FetchError>) -> Self {
        match result {
            Ok(profile) => LookupOutcome::Found(profile),
            Err(FetchError::NotFound { .. }) => LookupOutcome::NotFound,
            Err(FetchError::RateLimited { .. }) => LookupOutcome::RateLimited,
            Err(FetchError::Upstream { .. }) => LookupOutcome::Failed(FailureKind::Upstream),
            Err(FetchError::Decode { .. }) => LookupOutcome::Failed(FailureKind::MalformedPayload),
            Err(FetchError::Transport { .. } | FetchError::InvalidUrl { .. }) => {
                LookupOutcome::Failed(FailureKind::Network)
            }
        }
    }
}

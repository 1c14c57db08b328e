//! Error types for the upstream client.

use thiserror::Error;

/// Errors that can occur while building a `GitHubClient`.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid header value for '{name}'")]
    InvalidHeader { name: &'static str },

    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

/// Why a single profile lookup did not produce a `Profile`.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Upstream answered 404.
    #[error("User '{login}' not found")]
    NotFound { login: String },

    /// Upstream answered 403. `reset_at` is the unix time from
    /// `x-ratelimit-reset`, when the header was present.
    #[error("Rate limit exceeded")]
    RateLimited { reset_at: Option<u64> },

    /// Any other non-2xx answer.
    #[error("Upstream error: {status}")]
    Upstream { status: u16 },

    /// The request never completed (DNS, TLS, connect, body read).
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// 2xx answer whose body is not a profile.
    #[error("Malformed profile payload: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// The lookup URL could not be built from the configured base.
    #[error("Cannot build lookup URL from base '{base}'")]
    InvalidUrl { base: String },
}

impl FetchError {
    /// Short machine-readable kind for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::NotFound { .. } => "not_found",
            FetchError::RateLimited { .. } => "rate_limited",
            FetchError::Upstream { .. } => "upstream_error",
            FetchError::Transport { .. } => "transport_error",
            FetchError::Decode { .. } => "decode_error",
            FetchError::InvalidUrl { .. } => "invalid_url",
        }
    }
}

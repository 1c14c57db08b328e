//! Client for the GitHub user-lookup endpoint.
//!
//! - `types.rs` - `Profile` as returned by `GET /users/{username}`
//! - `error.rs` - Failure classification for a single lookup
//! - `client.rs` - reqwest-backed `GitHubClient`

mod client;
mod error;
mod types;

pub use client::GitHubClient;
pub use error::{ClientError, FetchError};
pub use types::Profile;

use std::future::Future;
use std::sync::Arc;

/// Anything that can resolve a login to a profile.
///
/// The search controller depends on this seam rather than on
/// `GitHubClient` directly so state transitions can be driven by
/// in-memory sources in tests.
pub trait ProfileSource: Send + Sync {
    /// Fetch one profile. Exactly one upstream request per call, no retries.
    fn fetch_profile(
        &self,
        login: &str,
    ) -> impl Future<Output = Result<Profile, FetchError>> + Send;
}

impl<S: ProfileSource + ?Sized> ProfileSource for &S {
    fn fetch_profile(
        &self,
        login: &str,
    ) -> impl Future<Output = Result<Profile, FetchError>> + Send {
        (**self).fetch_profile(login)
    }
}

impl<S: ProfileSource + ?Sized> ProfileSource for Arc<S> {
    fn fetch_profile(
        &self,
        login: &str,
    ) -> impl Future<Output = Result<Profile, FetchError>> + Send {
        (**self).fetch_profile(login)
    }
}

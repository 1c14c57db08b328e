use serde::{Deserialize, Serialize};

/// A GitHub user profile from the `/users/{username}` API.
///
/// Only the fields the card displays are kept; everything else in the
/// payload is ignored. Counters are unsigned, so a negative value is a
/// decode failure rather than a rendering problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    pub avatar_url: String,
    /// Public profile page (`html_url` in the API payload).
    pub html_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
}

impl Profile {
    /// `name` when the user set a non-blank one, `login` otherwise.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.login)
    }

    /// Bio text, only when it has visible content.
    pub fn bio(&self) -> Option<&str> {
        self.bio
            .as_deref()
            .map(str::trim)
            .filter(|bio| !bio.is_empty())
    }
}

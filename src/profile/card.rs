use std::fmt;

use serde_json::json;

use crate::github::Profile;
use crate::profile::format::{group_digits, DEFAULT_SEPARATOR};

/// Page title when no profile is shown.
pub const IDLE_TITLE: &str = "GitHub Profile Finder";
pub const IDLE_DESCRIPTION: &str =
    "Search any GitHub username to instantly see profile details, repos, followers, and more.";

/// One formatted counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: String,
}

/// Everything a view needs to draw a profile. Built once per profile;
/// no branching beyond optional-field presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub avatar_url: String,
    pub display_name: String,
    /// `@login`
    pub handle: String,
    pub profile_url: String,
    pub bio: Option<String>,
    /// Repositories, Followers, Following.
    pub stats: [Stat; 3],
}

impl ProfileCard {
    pub fn new(profile: &Profile, separator: char) -> Self {
        Self {
            avatar_url: profile.avatar_url.clone(),
            display_name: profile.display_name().to_string(),
            handle: format!("@{}", profile.login),
            profile_url: profile.html_url.clone(),
            bio: profile.bio().map(str::to_string),
            stats: [
                Stat {
                    label: "Repositories",
                    value: group_digits(profile.public_repos, separator),
                },
                Stat {
                    label: "Followers",
                    value: group_digits(profile.followers, separator),
                },
                Stat {
                    label: "Following",
                    value: group_digits(profile.following, separator),
                },
            ],
        }
    }

    pub fn page_title(&self) -> String {
        format!("{} — GitHub Profile", self.display_name)
    }

    pub fn description(&self) -> String {
        format!(
            "View {}'s GitHub profile: repos, followers, following.",
            self.display_name
        )
    }

    /// schema.org `Person` record for the profile.
    pub fn structured_data(&self) -> serde_json::Value {
        let mut person = json!({
            "@context": "https://schema.org",
            "@type": "Person",
            "name": self.display_name,
            "url": self.profile_url,
            "image": self.avatar_url,
            "sameAs": [self.profile_url],
        });
        if let (Some(bio), Some(map)) = (&self.bio, person.as_object_mut()) {
            map.insert("description".to_string(), json!(bio));
        }
        person
    }
}

impl From<&Profile> for ProfileCard {
    fn from(profile: &Profile) -> Self {
        Self::new(profile, DEFAULT_SEPARATOR)
    }
}

impl fmt::Display for ProfileCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.display_name, self.handle)?;
        if let Some(bio) = &self.bio {
            writeln!(f, "{bio}")?;
        }
        let stats = self
            .stats
            .iter()
            .map(|stat| format!("{} {}", stat.value, stat.label))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(f, "{stats}")?;
        writeln!(f, "Avatar: {}", self.avatar_url)?;
        write!(f, "View on GitHub: {}", self.profile_url)
    }
}

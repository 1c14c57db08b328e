//! Display structure for a fetched profile.

mod card;
mod format;

pub use card::{ProfileCard, Stat, IDLE_DESCRIPTION, IDLE_TITLE};
pub use format::{group_digits, DEFAULT_SEPARATOR};

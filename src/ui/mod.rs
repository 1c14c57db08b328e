//! Interactive terminal front end.
//!
//! Renders `SearchState` as an input form, a loading placeholder, an
//! error banner, the profile card, or an empty-state hint. Lookups run
//! on a tokio worker and come back as `AppEvent::LookupSettled`.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod worker;

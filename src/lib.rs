//! GitHub profile lookup: search state machine, upstream client,
//! profile renderer and the terminal front end built on them.

pub mod cli;
pub mod config;
pub mod github;
pub mod logging;
pub mod mvi;
pub mod profile;
pub mod search;
pub mod ui;

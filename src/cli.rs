//! Command line surface.
//!
//! With a username the binary performs one lookup and prints the card;
//! without one it starts the terminal UI.

use std::path::PathBuf;

use clap::Parser;

use crate::github::ProfileSource;
use crate::profile::ProfileCard;
use crate::search::SearchController;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a GitHub username.";

#[derive(Debug, Parser)]
#[command(name = "ghfinder", version, about = "Look up GitHub user profiles")]
pub struct Cli {
    /// Username to look up once; omit to start the interactive finder
    pub username: Option<String>,

    /// Print schema.org Person JSON instead of the text card
    #[arg(long)]
    pub json: bool,

    /// Override the API base URL from config
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// How the one-shot lookup prints a found profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Runs a single submission for `username`.
///
/// Returns the rendered profile, or the user-facing message of the
/// terminal status the search ended in.
pub async fn lookup_once<S: ProfileSource>(
    source: S,
    username: &str,
    format: OutputFormat,
    separator: char,
) -> Result<String, &'static str> {
    let mut controller = SearchController::new(source);
    controller.set_query(username);
    let state = controller.submit().await;

    if let Some(profile) = state.profile() {
        let card = ProfileCard::new(profile, separator);
        return Ok(match format {
            OutputFormat::Text => card.to_string(),
            OutputFormat::Json => format!("{:#}", card.structured_data()),
        });
    }

    Err(state.error_message().unwrap_or(EMPTY_QUERY_MESSAGE))
}

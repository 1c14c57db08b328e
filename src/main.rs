use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use ghfinder::cli::{lookup_once, Cli, OutputFormat};
use ghfinder::config::Config;
use ghfinder::github::GitHubClient;
use ghfinder::logging::init_tracing;
use ghfinder::ui::runtime;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    init_tracing();

    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;
    if let Some(api_url) = cli.api_url.clone() {
        config = config.with_api_url(api_url).context("Invalid --api-url")?;
    }

    let client = GitHubClient::new(&config.api).context("Failed to set up GitHub client")?;
    let rt = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    let Some(username) = cli.username.as_deref() else {
        runtime::run(&config, client, rt.handle()).context("Terminal UI failed")?;
        return Ok(ExitCode::SUCCESS);
    };

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let separator = config.ui.thousands_separator;
    match rt.block_on(lookup_once(client, username, format, separator)) {
        Ok(rendered) => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{rendered}").context("Failed to write to stdout")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(message) => {
            eprintln!("Error: {message}");
            Ok(ExitCode::from(1))
        }
    }
}

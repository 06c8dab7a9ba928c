mod api;
mod app;
mod cli;
mod error;
mod list;
mod models;
mod prompt;
mod pull;
mod workspace;

#[cfg(test)]
mod testing;

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::cli::{Cli, Config};

/// Logs go to stderr so they never mix with the listing or the prompt.
/// `RUST_LOG` overrides the level picked by `--verbose`.
fn tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let config = Config::from(Cli::parse());
    tracing(config.verbose);

    let app = App::new(config)?;
    Ok(app.run().await)
}

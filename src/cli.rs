use std::time::Duration;

use clap::Parser;
use reqwest::Url;

use crate::api::{Endpoints, LISTING_URL, RAW_PREFIX};

const AFTER_HELP: &str = "\
Examples:
  pullignore <language>   (e.g. pullignore Go, pullignore Python, pullignore Node)
  pullignore --list       (to see all available languages)";

/// Copies a .gitignore file for a language into the current directory,
/// using the templates of the github/gitignore repository.
#[derive(Parser, Debug)]
#[command(name = "pullignore", version, after_help = AFTER_HELP)]
pub struct Cli {
    /// List available .gitignore files
    #[arg(short, long)]
    pub list: bool,

    /// Template to pull, as named by --list
    #[arg(value_name = "LANGUAGE", required_unless_present = "list")]
    pub language: Option<String>,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Request timeout in seconds
    #[arg(long, env = "PULLIGNORE_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Repository listing endpoint
    #[arg(
        long,
        env = "PULLIGNORE_LISTING_URL",
        default_value = LISTING_URL,
        hide_default_value = true
    )]
    pub listing_url: Url,

    /// Prefix raw templates are downloaded from
    #[arg(
        long,
        env = "PULLIGNORE_RAW_PREFIX",
        default_value = RAW_PREFIX,
        hide_default_value = true
    )]
    pub raw_prefix: Url,
}

/// The operation selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Pull { language: String },
}

/// Everything a run needs, resolved from the command line and environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,
    pub endpoints: Endpoints,
    pub timeout: Duration,
    pub verbose: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        // clap guarantees a language unless --list was given
        let command = match (cli.list, cli.language) {
            (false, Some(language)) => Command::Pull { language },
            _ => Command::List,
        };
        Self {
            command,
            endpoints: Endpoints {
                listing: cli.listing_url,
                raw_prefix: cli.raw_prefix,
            },
            timeout: Duration::from_secs(cli.timeout),
            verbose: cli.verbose,
        }
    }
}

use std::io::{self, Write};
use std::process::ExitCode;

use crate::api::ApiClient;
use crate::cli::{Command, Config};
use crate::error::{Error, ErrorKind, Result};
use crate::prompt::ConsolePrompt;
use crate::workspace::{GITIGNORE, Workspace};
use crate::{list, pull};

/// A configured run of the tool.
pub struct App {
    config: Config,
    client: ApiClient,
}

impl App {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = ApiClient::new(config.timeout)?;
        Ok(Self { config, client })
    }

    /// Runs the selected command, then maps its outcome to an exit status.
    pub async fn run(&self) -> ExitCode {
        match self.execute().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                tracing::debug!(kind = ?err.kind(), "command failed");
                report(&err, &self.config, &mut io::stdout(), &mut io::stderr());
                ExitCode::FAILURE
            }
        }
    }

    async fn execute(&self) -> Result<()> {
        let endpoints = &self.config.endpoints;
        match &self.config.command {
            Command::List => list::list(&self.client, endpoints).await,
            Command::Pull { language } => {
                let target = Workspace::current_dir();
                let mut prompt = ConsolePrompt::stdio();
                let written =
                    pull::pull(&self.client, endpoints, language, &target, &mut prompt).await?;
                println!("{written} bytes written to {GITIGNORE}");
                println!("File downloaded successfully!");
                Ok(())
            }
        }
    }
}

/// Renders a failure for the user. Cancellation is not an error and goes to stdout.
pub fn report(err: &Error, config: &Config, out: &mut impl Write, err_out: &mut impl Write) {
    let _ = match (err.kind(), &config.command) {
        (ErrorKind::OperationCancelled, _) => writeln!(out, "Operation cancelled by user."),
        (ErrorKind::RemoteNotFound, Command::Pull { language }) => writeln!(
            err_out,
            "Error: No .gitignore file found for '{language}'.\n\
             Please ensure you have typed the language name correctly.\n\
             For a full list of available languages, use: pullignore --list"
        ),
        (_, Command::List) => writeln!(
            err_out,
            "Error: could not fetch file list from {}: {err}",
            config.endpoints.listing
        ),
        (_, Command::Pull { .. }) => writeln!(err_out, "Error: {err}"),
    };
}

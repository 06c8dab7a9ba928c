//! Error taxonomy shared by the lister and the puller.

use std::io;
use std::path::PathBuf;

use reqwest::{StatusCode, Url};
use thiserror::Error;

/// Failure raised by an [`HttpClient`](crate::api::HttpClient) before a status is known.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The requested template does not exist upstream.
    #[error(".gitignore file not found for '{language}' at {url}")]
    NotFound { language: String, url: Url },

    #[error("received non-success HTTP status for {url}: {status}")]
    Status { url: Url, status: StatusCode },

    #[error("failed to make HTTP request to {url}: {source}")]
    Transport {
        url: Url,
        #[source]
        source: TransportError,
    },

    #[error("failed to decode listing from {url}: {source}")]
    Decode {
        url: Url,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to check for file {}: {source}", path.display())]
    CheckFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open/create file {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write to file {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("operation cancelled by user")]
    Cancelled,

    #[error("failed to read user input: {0}")]
    PromptRead(#[source] io::Error),

    #[error("failed to prompt user: {0}")]
    PromptWrite(#[source] io::Error),

    #[error("cannot append a path to endpoint {0}")]
    InvalidEndpoint(Url),
}

/// Coarse classification callers use to pick a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RemoteNotFound,
    RemoteUnavailable,
    LocalIoFailure,
    DecodeFailure,
    OperationCancelled,
    PromptReadFailure,
    InvalidConfig,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::RemoteNotFound,
            Self::Status { .. } | Self::Transport { .. } => ErrorKind::RemoteUnavailable,
            Self::Decode { .. } => ErrorKind::DecodeFailure,
            Self::CheckFile { .. } | Self::OpenFile { .. } | Self::WriteFile { .. } => {
                ErrorKind::LocalIoFailure
            }
            Self::Cancelled => ErrorKind::OperationCancelled,
            Self::PromptRead(_) | Self::PromptWrite(_) => ErrorKind::PromptReadFailure,
            Self::InvalidEndpoint(_) => ErrorKind::InvalidConfig,
        }
    }

    pub(crate) fn transport(url: &Url, source: impl Into<TransportError>) -> Self {
        Self::Transport {
            url: url.clone(),
            source: source.into(),
        }
    }
}

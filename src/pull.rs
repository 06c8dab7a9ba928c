//! Downloading one template into the local `.gitignore`.
//!
//! The remote template is probed with HEAD before the local file is looked at,
//! so the user is never asked about a file for a template that does not exist.

use std::io;
use std::path::Path;

use reqwest::{StatusCode, Url};
use tokio::io::AsyncWriteExt;

use crate::api::{Endpoints, HttpClient, ResponseBody};
use crate::error::{Error, Result};
use crate::prompt::{Choice, Prompt};
use crate::workspace::{Destination, LocalTarget, WriteMode};

/// Pulls `<language>.gitignore` into `target` and returns the number of bytes written.
///
/// When appending, the count includes the newline separator written first.
pub async fn pull(
    client: &impl HttpClient,
    endpoints: &Endpoints,
    language: &str,
    target: &impl LocalTarget,
    prompt: &mut impl Prompt,
) -> Result<u64> {
    let url = endpoints.template_url(language)?;

    probe(client, &url, language).await?;
    let mode = reconcile(target, prompt).await?;

    tracing::info!("Pulling '{url}'...");
    let mut body = download(client, &url, language).await?;
    write(target, mode, body.as_mut(), &url).await
}

/// Checks the template exists upstream without transferring it.
async fn probe(client: &impl HttpClient, url: &Url, language: &str) -> Result<()> {
    let response = client
        .head(url)
        .await
        .map_err(|source| Error::transport(url, source))?;
    check_status(response.status, url, language)
}

/// Decides how to open the target, asking only when it already exists.
async fn reconcile(target: &impl LocalTarget, prompt: &mut impl Prompt) -> Result<WriteMode> {
    let path = target.path();
    let exists = target.exists().await.map_err(|source| Error::CheckFile {
        path: path.to_path_buf(),
        source,
    })?;
    if !exists {
        tracing::debug!(path = %path.display(), "no existing file, creating it");
        return Ok(WriteMode::Truncate);
    }

    match prompt.choose(path).await? {
        Choice::Cancel => Err(Error::Cancelled),
        Choice::Append => {
            tracing::info!("Appending to '{}'...", path.display());
            Ok(WriteMode::Append)
        }
        Choice::Overwrite => {
            tracing::info!("Overwriting '{}'...", path.display());
            Ok(WriteMode::Truncate)
        }
    }
}

async fn download(
    client: &impl HttpClient,
    url: &Url,
    language: &str,
) -> Result<Box<dyn ResponseBody>> {
    let response = client
        .get(url)
        .await
        .map_err(|source| Error::transport(url, source))?;
    check_status(response.status, url, language)?;
    Ok(response.body)
}

/// Streams `body` into the target. A failure part way leaves what was already written.
async fn write(
    target: &impl LocalTarget,
    mode: WriteMode,
    body: &mut dyn ResponseBody,
    url: &Url,
) -> Result<u64> {
    let path = target.path();
    let mut out = target.open(mode).await.map_err(|source| Error::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;

    let copied = copy(body, &mut out, mode, url, path).await;
    // pending writes settle on every exit path
    let flushed = out.flush().await;
    let written = copied?;
    flushed.map_err(|source| Error::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), written, "template written");
    Ok(written)
}

async fn copy(
    body: &mut dyn ResponseBody,
    out: &mut Destination,
    mode: WriteMode,
    url: &Url,
    path: &Path,
) -> Result<u64> {
    let write_err = |source: io::Error| Error::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let mut written = 0u64;
    if mode == WriteMode::Append {
        out.write_all(b"\n").await.map_err(write_err)?;
        written += 1;
    }

    while let Some(chunk) = body
        .chunk()
        .await
        .map_err(|source| Error::transport(url, source))?
    {
        out.write_all(&chunk).await.map_err(write_err)?;
        written += chunk.len() as u64;
    }
    Ok(written)
}

fn check_status(status: StatusCode, url: &Url, language: &str) -> Result<()> {
    if status == StatusCode::NOT_FOUND {
        return Err(Error::NotFound {
            language: language.to_string(),
            url: url.clone(),
        });
    }
    if !status.is_success() {
        return Err(Error::Status {
            url: url.clone(),
            status,
        });
    }
    Ok(())
}

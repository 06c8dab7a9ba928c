use std::io::{self, Write};

use crate::api::{self, Endpoints, HttpClient};
use crate::error::{Error, Result};
use crate::models::{self, RemoteEntry, TemplateName};

const LIST_HEADER: &str = "Available .gitignore files:\n\n";
const SEPARATOR: &str = "---\n";

/// Fetches the remote listing and prints the available templates to stdout.
pub async fn list(client: &impl HttpClient, endpoints: &Endpoints) -> Result<()> {
    let entries = fetch_listing(client, endpoints).await?;
    let mut names = models::templates(entries);
    tracing::debug!(count = names.len(), "templates found");

    sort_names(&mut names);
    let stdout = io::stdout();
    if let Err(err) = render(&names, &mut stdout.lock()) {
        tracing::debug!(%err, "listing output cut short");
    }
    Ok(())
}

/// Downloads and decodes the repository listing.
pub async fn fetch_listing(
    client: &impl HttpClient,
    endpoints: &Endpoints,
) -> Result<Vec<RemoteEntry>> {
    let url = &endpoints.listing;
    let mut response = client
        .get(url)
        .await
        .map_err(|source| Error::transport(url, source))?;

    if !response.status.is_success() {
        return Err(Error::Status {
            url: url.clone(),
            status: response.status,
        });
    }

    let body = api::read_to_end(response.body.as_mut())
        .await
        .map_err(|source| Error::transport(url, source))?;

    serde_json::from_slice(&body).map_err(|source| Error::Decode {
        url: url.clone(),
        source,
    })
}

/// Case-insensitive ascending order; equal keys keep their listing order.
pub fn sort_names(names: &mut [TemplateName]) {
    names.sort_by_cached_key(|name| name.file_name().to_lowercase());
}

/// Writes the header, then one display name per line, with a separator line
/// whenever the lower-cased first character changes.
pub fn render(names: &[TemplateName], out: &mut impl Write) -> io::Result<()> {
    out.write_all(LIST_HEADER.as_bytes())?;

    let mut current: Option<char> = None;
    for name in names {
        let first = name.file_name().to_lowercase().chars().next();
        if current.is_some() && first != current {
            out.write_all(SEPARATOR.as_bytes())?;
        }
        current = first;
        writeln!(out, "{}", name.display_name())?;
    }
    out.flush()
}

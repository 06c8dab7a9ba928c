use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{StatusCode, Url};

use crate::error::{Error, TransportError};
use crate::models::TEMPLATE_SUFFIX;

/// Directory listing of the github/gitignore repository.
pub const LISTING_URL: &str = "https://api.github.com/repos/github/gitignore/contents/";
/// Raw content prefix templates are downloaded from.
pub const RAW_PREFIX: &str = "https://raw.githubusercontent.com/github/gitignore/main/";

/// Status and streaming body of one HTTP exchange.
pub struct RemoteResponse {
    pub status: StatusCode,
    pub body: Box<dyn ResponseBody>,
}

/// Body of a response, read chunk by chunk. Dropping it releases the connection.
#[async_trait]
pub trait ResponseBody: Send {
    /// Next chunk of the body, `None` once it is drained.
    async fn chunk(&mut self) -> Result<Option<Bytes>, TransportError>;
}

/// The two requests the tool needs from an HTTP stack.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &Url) -> Result<RemoteResponse, TransportError>;
    async fn head(&self, url: &Url) -> Result<RemoteResponse, TransportError>;
}

/// Reads a body to the end.
pub async fn read_to_end(body: &mut dyn ResponseBody) -> Result<Vec<u8>, TransportError> {
    let mut buf = Vec::new();
    while let Some(chunk) = body.chunk().await? {
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

/// Where templates are listed and downloaded from.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub listing: Url,
    pub raw_prefix: Url,
}

impl Endpoints {
    /// URL of `<language>.gitignore` under the raw prefix.
    ///
    /// `/` in the name selects a folder (`Global/macOS`); each piece is pushed
    /// as its own segment so other reserved characters are percent-encoded.
    /// Empty pieces are dropped.
    pub fn template_url(&self, language: &str) -> Result<Url, Error> {
        let name = format!("{language}{TEMPLATE_SUFFIX}");
        let mut url = self.raw_prefix.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidEndpoint(self.raw_prefix.clone()))?
            .pop_if_empty()
            .extend(name.split('/').filter(|piece| !piece.is_empty()));
        Ok(url)
    }
}

/// Responsible for all communication with the template host.
pub struct ApiClient {
    client: reqwest::Client,
}

impl ApiClient {
    /// Builds the underlying client. The listing API rejects requests without a user agent.
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("pullignore/", env!("CARGO_PKG_VERSION"))),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ApiClient {
    async fn get(&self, url: &Url) -> Result<RemoteResponse, TransportError> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url.clone()).send().await?;
        Ok(RemoteResponse {
            status: response.status(),
            body: Box::new(response),
        })
    }

    async fn head(&self, url: &Url) -> Result<RemoteResponse, TransportError> {
        tracing::debug!(%url, "HEAD");
        let response = self.client.head(url.clone()).send().await?;
        Ok(RemoteResponse {
            status: response.status(),
            body: Box::new(response),
        })
    }
}

#[async_trait]
impl ResponseBody for reqwest::Response {
    async fn chunk(&mut self) -> Result<Option<Bytes>, TransportError> {
        Ok(reqwest::Response::chunk(self).await?)
    }
}

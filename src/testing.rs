//! Test doubles for the HTTP seam.

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{StatusCode, Url};

use crate::api::{Endpoints, HttpClient, LISTING_URL, RAW_PREFIX, RemoteResponse, ResponseBody};
use crate::error::TransportError;

pub fn github_endpoints() -> Endpoints {
    Endpoints {
        listing: Url::parse(LISTING_URL).unwrap(),
        raw_prefix: Url::parse(RAW_PREFIX).unwrap(),
    }
}

/// Canned outcome of one request.
#[derive(Clone)]
pub enum Reply {
    /// Status plus body chunks.
    Status(u16, Vec<Bytes>),
    /// Status, then a body that fails after yielding its chunks.
    BrokenBody(u16, Vec<Bytes>),
    /// The request never produced a response.
    Unreachable,
}

impl Reply {
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::Status(200, vec![body.into()])
    }

    pub fn status(code: u16) -> Self {
        Self::Status(code, Vec::new())
    }

    fn respond(&self) -> Result<RemoteResponse, TransportError> {
        let (code, chunks, fail) = match self {
            Self::Status(code, chunks) => (*code, chunks, false),
            Self::BrokenBody(code, chunks) => (*code, chunks, true),
            Self::Unreachable => {
                return Err(io::Error::from(io::ErrorKind::ConnectionRefused).into());
            }
        };
        Ok(RemoteResponse {
            status: StatusCode::from_u16(code).unwrap(),
            body: Box::new(FakeBody {
                chunks: chunks.iter().cloned().collect(),
                fail,
            }),
        })
    }
}

struct FakeBody {
    chunks: VecDeque<Bytes>,
    fail: bool,
}

#[async_trait]
impl ResponseBody for FakeBody {
    async fn chunk(&mut self) -> Result<Option<Bytes>, TransportError> {
        match self.chunks.pop_front() {
            Some(chunk) => Ok(Some(chunk)),
            None if self.fail => Err(io::Error::from(io::ErrorKind::ConnectionReset).into()),
            None => Ok(None),
        }
    }
}

/// Answers every HEAD and every GET with a fixed reply and records the calls.
pub struct FakeClient {
    head: Reply,
    get: Reply,
    calls: Mutex<Vec<String>>,
}

impl FakeClient {
    pub fn new(head: Reply, get: Reply) -> Self {
        Self {
            head,
            get,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A client where both probe and download succeed with `body`.
    pub fn serving(body: impl Into<Bytes>) -> Self {
        Self::new(Reply::status(200), Reply::ok(body))
    }

    /// Requests seen so far, formatted as `METHOD url`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, method: &str, url: &Url) {
        self.calls.lock().unwrap().push(format!("{method} {url}"));
    }
}

#[async_trait]
impl HttpClient for FakeClient {
    async fn get(&self, url: &Url) -> Result<RemoteResponse, TransportError> {
        self.record("GET", url);
        self.get.respond()
    }

    async fn head(&self, url: &Url) -> Result<RemoteResponse, TransportError> {
        self.record("HEAD", url);
        self.head.respond()
    }
}

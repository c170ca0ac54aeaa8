//! Request/response values exchanged with a transport.

use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::error::{Error, Result};

pub type Headers = BTreeMap<String, String>;

/// A fully-formed HTTP request: URL with encoded query, optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub url: String,
    pub headers: Headers,
    pub body: Option<String>,
    pub timeout: Option<Duration>,
}

impl Request {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), headers: Headers::new(), body: None, timeout: None }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Status code and raw body, passed through untouched whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn is_success(&self) -> bool { (200..300).contains(&self.status) }

    /// Decodes the body as JSON. Decoding is opt-in; the client never does it.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| Error::Decode(e.to_string()))
    }
}

use std::time::Duration;

use solrq_core::config::{EndpointConfig, SolrqConfig};
use solrq_core::types::{Headers, Request};
use solrq_core::Result;

/// A resolved service location: base URL (core or collection), optional
/// handler, headers and timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub url: String,
    /// Overrides the per-operation default handler when set.
    pub handler: Option<String>,
    pub headers: Headers,
    pub timeout: Option<Duration>,
}

impl Endpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), handler: None, headers: Headers::new(), timeout: None }
    }

    pub fn with_handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = Some(handler.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn from_config(config: &EndpointConfig) -> Self {
        Self {
            url: config.url.clone(),
            handler: config.handler.clone(),
            headers: config.headers.clone(),
            timeout: config.timeout_ms.map(Duration::from_millis),
        }
    }

    /// `url/handler`, with the configured handler taking precedence.
    pub fn handler_url(&self, default_handler: &str) -> String {
        let handler = self.handler.as_deref().unwrap_or(default_handler).trim_matches('/');
        let base = self.url.trim_end_matches('/');
        if handler.is_empty() { base.to_string() } else { format!("{}/{}", base, handler) }
    }

    /// `url/handler?query`; no `?` when the query string is empty.
    pub fn request_url(&self, default_handler: &str, query: &str) -> String {
        let url = self.handler_url(default_handler);
        if query.is_empty() { url } else { format!("{}?{}", url, query) }
    }

    pub fn request(&self, default_handler: &str, query: &str) -> Request {
        Request {
            url: self.request_url(default_handler, query),
            headers: self.headers.clone(),
            body: None,
            timeout: self.timeout,
        }
    }
}

/// Either a configured endpoint name or a literal endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointRef {
    Name(String),
    Literal(Endpoint),
}

impl From<&str> for EndpointRef {
    /// `http://` and `https://` strings are literal base URLs; anything else is a name.
    fn from(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            EndpointRef::Literal(Endpoint::new(s))
        } else {
            EndpointRef::Name(s.to_string())
        }
    }
}

impl From<String> for EndpointRef {
    fn from(s: String) -> Self { EndpointRef::from(s.as_str()) }
}

impl From<&String> for EndpointRef {
    fn from(s: &String) -> Self { EndpointRef::from(s.as_str()) }
}

impl From<Endpoint> for EndpointRef {
    fn from(endpoint: Endpoint) -> Self { EndpointRef::Literal(endpoint) }
}

impl From<&Endpoint> for EndpointRef {
    fn from(endpoint: &Endpoint) -> Self { EndpointRef::Literal(endpoint.clone()) }
}

/// Resolves names against `config`; unknown names are `EndpointNotConfigured`.
pub fn resolve(config: &SolrqConfig, endpoint: &EndpointRef) -> Result<Endpoint> {
    match endpoint {
        EndpointRef::Literal(endpoint) => Ok(endpoint.clone()),
        EndpointRef::Name(name) => config.endpoint(name).map(Endpoint::from_config),
    }
}

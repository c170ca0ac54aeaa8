use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use solrq_core::traits::Transport;
use solrq_core::types::{Request, Response};
use solrq_core::{Error, Result};

/// Blocking reqwest transport. One attempt per call; any status is returned.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Operation(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self { Self { client } }

    fn send(&self, mut builder: RequestBuilder, request: &Request) -> Result<Response> {
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }
        let response = builder.send().map_err(map_send_error)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(map_send_error)?;
        debug!(url = %request.url, status, bytes = body.len(), "response received");
        Ok(Response { status, body })
    }
}

impl Transport for HttpTransport {
    fn get(&self, request: &Request) -> Result<Response> {
        debug!(url = %request.url, "GET");
        self.send(self.client.get(&request.url), request)
    }

    fn post(&self, request: &Request) -> Result<Response> {
        debug!(url = %request.url, "POST");
        let builder = self
            .client
            .post(&request.url)
            .header(CONTENT_TYPE, "application/json")
            .body(request.body.clone().unwrap_or_default());
        self.send(builder, request)
    }
}

fn map_send_error(e: reqwest::Error) -> Error {
    if e.is_connect() || e.is_timeout() {
        Error::ConnectionFailure(e.to_string())
    } else {
        Error::Operation(format!("Request failed: {}", e))
    }
}

//! # HTTP Transport
//!
//! The one place that talks to the network. The client wrapper only sees the
//! [`HttpTransport`] trait, so tests can swap in [`super::mock::MockTransport`].

use anyhow::Result;

/// Query string as ordered key/value pairs
pub type QueryParams = Vec<(String, String)>;

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Shorthand for a 200 response
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }
}

/// Blocking HTTP GET abstraction
///
/// An `Err` means the exchange never completed (DNS, connect, TLS, read
/// errors). Any status code, including 4xx/5xx, is an `Ok`.
pub trait HttpTransport {
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<TransportResponse>;
}

/// Production transport on top of `reqwest::blocking`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Create a transport with reqwest's default settings
    pub fn new() -> Result<Self> {
        tracing::debug!("Creating blocking reqwest client");
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<TransportResponse> {
        let response = self.client.get(url).query(query).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(TransportResponse { status, body })
    }
}

//! HTTP transport used by the fetcher
//!
//! A `Transport` performs exactly one GET and hands back the status and the
//! fully-read body, so the underlying connection is released before the
//! caller decides whether to retry.

use crate::error::{Result, TrafficError};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, instrument};

/// A completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a response from a status code and body
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is the canonical 200 OK
    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Something that can issue a single HTTP GET
pub trait Transport {
    /// Fetch `url`, giving up after `timeout`
    ///
    /// Errors mean no response was received at all (DNS failure, refused
    /// connection, reset, timeout). Non-200 responses are returned as `Ok`.
    fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse>;
}

/// Transport backed by a blocking reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with a fresh client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TrafficError::transport("Failed to build HTTP client", Some(Box::new(e))))?;

        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    #[instrument(skip(self, url))]
    fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .map_err(|e| TrafficError::transport("Request failed", Some(Box::new(e))))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| TrafficError::transport("Failed to read response body", Some(Box::new(e))))?;

        debug!("Received HTTP {} with {} byte body", status, body.len());
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_ok() {
        assert!(HttpResponse::new(200, "{}").is_ok());
        assert!(!HttpResponse::new(204, "").is_ok());
        assert!(!HttpResponse::new(503, "busy").is_ok());
    }

    #[test]
    fn test_transport_creation() {
        assert!(ReqwestTransport::new().is_ok());
    }

    #[test]
    fn test_unreachable_host_is_transport_error() {
        let transport = ReqwestTransport::new().unwrap();
        let result = transport.get("http://127.0.0.1:9/", Duration::from_secs(2));
        assert!(matches!(result, Err(TrafficError::Transport { .. })));
    }
}

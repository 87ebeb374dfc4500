//! Outbound HTTP transport for upstream calls
//!
//! The MusicBrainz client only needs "send a GET, get back status and body".
//! Keeping that behind [`UpstreamTransport`] lets tests swap in a stub.

use async_trait::async_trait;
use reqwest::{header, Client, Url};
use std::time::Duration;
use thiserror::Error;

/// Transport-level failures (nothing came back from upstream)
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),
}

/// One outbound GET request
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub url: Url,
    /// Sent as the `User-Agent` header
    pub user_agent: String,
    pub timeout: Duration,
}

/// Raw upstream response
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    /// Numeric HTTP status code
    pub status: u16,
    /// Canonical reason phrase for `status` (empty if unknown)
    pub status_text: String,
    pub body: Vec<u8>,
}

impl UpstreamResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        let status_text = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default()
            .to_string();

        Self {
            status,
            status_text,
            body: body.into(),
        }
    }
}

/// Minimal send-request/receive-status-and-body interface
#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    async fn get(&self, request: UpstreamRequest) -> Result<UpstreamResponse, TransportError>;
}

/// Production transport backed by `reqwest`
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let http_client = Client::builder()
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(Self { http_client })
    }

    fn classify(err: reqwest::Error, timeout: Duration) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(timeout)
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

#[async_trait]
impl UpstreamTransport for ReqwestTransport {
    async fn get(&self, request: UpstreamRequest) -> Result<UpstreamResponse, TransportError> {
        let timeout = request.timeout;

        let response = self
            .http_client
            .get(request.url)
            .header(header::USER_AGENT, request.user_agent)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| Self::classify(e, timeout))?;

        let status = response.status().as_u16();

        // The timeout covers the body read as well
        let body = response
            .bytes()
            .await
            .map_err(|e| Self::classify(e, timeout))?;

        Ok(UpstreamResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_status_text() {
        let response = UpstreamResponse::new(503, Vec::new());
        assert_eq!(response.status_text, "Service Unavailable");

        let response = UpstreamResponse::new(599, Vec::new());
        assert_eq!(response.status_text, "");
    }

    #[test]
    fn test_transport_creation() {
        assert!(ReqwestTransport::new().is_ok());
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Grab a free port, then release it so nothing is listening there
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = ReqwestTransport::new().unwrap();
        let request = UpstreamRequest {
            url: Url::parse(&format!("http://{}/release/", addr)).unwrap(),
            user_agent: "test-agent/0.0".to_string(),
            timeout: Duration::from_secs(2),
        };

        let result = transport.get(request).await;
        assert!(result.is_err());
    }
}

//! Upstream game-statistics API client.
//!
//! Every data route proxies the official Brawl Stars HTTP API. The client
//! is deliberately thin: one authenticated GET per call, JSON in, JSON out,
//! no caching and no retries. Handlers talk to the [`UpstreamClient`] trait
//! so tests can substitute a double.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Errors that can occur talking to the upstream API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    #[error("Upstream returned HTTP {status}")]
    Status { status: u16, body: String },
}

impl UpstreamError {
    /// Status code of the upstream response, when one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            UpstreamError::Status { status, .. } => Some(*status),
            UpstreamError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// A JSON-returning GET against the upstream API.
///
/// `path` is the upstream path-and-query relative to the configured base
/// URL, e.g. `/players/%239LUU9RR/battlelog`.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<Value, UpstreamError>;
}

/// Reqwest-backed client for the Brawl Stars API.
pub struct BrawlApiClient {
    client: Client,
    base_url: String,
}

impl BrawlApiClient {
    /// Build a client holding the bearer credential and request timeout.
    ///
    /// Tokens are accepted with or without the `Bearer ` prefix.
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self, UpstreamError> {
        // Validate the base URL up front so a typo fails at startup, not on
        // the first request.
        Url::parse(base_url).map_err(|e| UpstreamError::InvalidUrl(e.to_string()))?;

        let authorization = if token.starts_with("Bearer") {
            token.to_string()
        } else {
            format!("Bearer {}", token)
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&authorization)
                .map_err(|e| UpstreamError::InvalidCredential(e.to_string()))?,
        );

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl UpstreamClient for BrawlApiClient {
    async fn fetch(&self, path: &str) -> Result<Value, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

//! Page retrieval
//!
//! Issues a GET, insists on a 200 answer and parses the body into a
//! [`scraper::Html`] document. The response is fully consumed before the
//! document is handed back, so callers never hold a connection.

use crate::config::ScraperConfig;
use crate::error::{ConfigError, FetchError};
use reqwest::{Client, StatusCode};
use scraper::Html;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// HTTP page fetcher with a bounded per-request timeout
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    timeout_ms: u64,
}

impl PageFetcher {
    /// Build a fetcher from the scraper configuration
    pub fn new(config: &ScraperConfig) -> Result<Self, ConfigError> {
        let mut builder = Client::builder().timeout(Duration::from_millis(config.timeout_ms));
        if let Some(ua) = &config.user_agent {
            builder = builder.user_agent(ua.as_str());
        }
        let client = builder
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self {
            client,
            timeout_ms: config.timeout_ms,
        })
    }

    /// Fetch a page and parse it into a document
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<Html, FetchError> {
        let parsed =
            Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Status code error: {} for {}", status, url);
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout_ms)
            } else {
                FetchError::Parse(e.to_string())
            }
        })?;
        debug!("Fetched {} bytes", body.len());

        Ok(Html::parse_document(&body))
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            warn!("Request timed out after {}ms", self.timeout_ms);
            FetchError::Timeout(self.timeout_ms)
        } else if err.is_builder() {
            FetchError::InvalidUrl(err.to_string())
        } else {
            warn!("Failed to fetch webpage: {}", err);
            FetchError::Network(err.to_string())
        }
    }
}

//! Scraper configuration
//!
//! Base URLs, selectors and HTTP client settings. Defaults point at the live
//! Coface dashboard; tests and the CLI override them through the builder.

use crate::error::ConfigError;
use url::Url;

/// Listing page of the economic risk dashboard
pub const DEFAULT_LISTING_URL: &str =
    "https://www.coface.fr/actualites-economie-conseils/tableau-de-bord-des-risques-economiques";

/// Path segment under the listing URL that holds country sheets
pub const DETAIL_PATH: &str = "fiches-risques-pays";

/// Selector enumerating country labels on the listing page
pub const DEFAULT_OPTION_SELECTOR: &str = "option";

/// Configuration for the scraper session
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Listing page URL; detail pages live under `{listing_url}/fiches-risques-pays/`
    pub listing_url: String,
    /// Selector used to enumerate options on the listing page (default: `option`)
    pub option_selector: String,
    /// Per-request timeout in milliseconds (default: 30000)
    pub timeout_ms: u64,
    /// User agent string (None = reqwest default)
    pub user_agent: Option<String>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            option_selector: DEFAULT_OPTION_SELECTOR.to_string(),
            timeout_ms: 30000,
            user_agent: None,
        }
    }
}

impl ScraperConfig {
    /// Create a new config builder
    pub fn builder() -> ScraperConfigBuilder {
        ScraperConfigBuilder::default()
    }

    /// Check that the listing URL is an absolute http(s) URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = Url::parse(&self.listing_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.listing_url.clone(),
            reason: e.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::InvalidBaseUrl {
                url: self.listing_url.clone(),
                reason: format!("unsupported scheme '{}'", other),
            }),
        }
    }

    /// Detail page URL for an already-normalized slug
    pub fn detail_url(&self, slug: &str) -> String {
        format!(
            "{}/{}/{}",
            self.listing_url.trim_end_matches('/'),
            DETAIL_PATH,
            slug
        )
    }
}

/// Builder for ScraperConfig
#[derive(Default)]
pub struct ScraperConfigBuilder {
    config: ScraperConfig,
}

impl ScraperConfigBuilder {
    /// Set the listing page URL
    pub fn listing_url<S: Into<String>>(mut self, url: S) -> Self {
        self.config.listing_url = url.into();
        self
    }

    /// Set the option selector
    pub fn option_selector<S: Into<String>>(mut self, selector: S) -> Self {
        self.config.option_selector = selector.into();
        self
    }

    /// Set the per-request timeout
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.config.timeout_ms = ms;
        self
    }

    /// Set user agent
    pub fn user_agent<S: Into<String>>(mut self, ua: S) -> Self {
        self.config.user_agent = Some(ua.into());
        self
    }

    /// Build the config
    pub fn build(self) -> ScraperConfig {
        self.config
    }
}

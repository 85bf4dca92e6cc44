//! CrossRef HTTP client.
//!
//! Issues a single GET per lookup and hands back the parsed response
//! envelope. No retries and no timeout override beyond the transport
//! default.

use reqwest::StatusCode;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::models::{Envelope, WorkQuery};

/// Errors that can occur during a lookup
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The API answered with a non-success status
    #[error("{0}")]
    Http(StatusCode),

    /// The request could not be issued or completed
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not a valid works envelope
    #[error("parse error: {0}")]
    Parse(String),

    /// The built target was not a valid URL
    #[error("invalid request URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
}

/// CrossRef works API client
#[derive(Debug, Clone)]
pub struct CrossrefClient {
    http: reqwest::Client,
    base_url: String,
}

impl CrossrefClient {
    /// Create a client from configuration.
    ///
    /// The user agent carries the crate name and version, plus a
    /// `mailto:` contact when one is configured (CrossRef's polite-pool
    /// convention).
    pub fn new(config: &Config) -> Result<Self, LookupError> {
        let user_agent = match &config.api.mailto {
            Some(mailto) => format!(
                "{}/{} (mailto:{})",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                mailto
            ),
            None => format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        };

        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api.base_url.clone(),
        })
    }

    /// Replace the API base URL. Tests point this at a local server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The API base URL this client targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the response envelope for a query.
    ///
    /// One GET, no retries. A non-2xx status maps to [`LookupError::Http`]
    /// so the caller can report the status description and degrade to the
    /// no-result outcome.
    pub async fn fetch(&self, query: &WorkQuery) -> Result<Envelope, LookupError> {
        let target = query.target_url(&self.base_url);
        let url = Url::parse(&target).map_err(|source| LookupError::InvalidUrl {
            url: target.clone(),
            source,
        })?;

        debug!(%url, "requesting work metadata");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Http(status));
        }

        response
            .json::<Envelope>()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))
    }
}

//! MediaWiki Action API client.
//!
//! Provides a client for the two lookups the result adapter needs:
//! full-text search and batched page extracts.
//!
//! ### Specification
//!
//! - **Endpoint**: `https://en.wikipedia.org/w/api.php` (configurable)
//! - **Authentication**: none; requests carry `origin=*` and an identifying User-Agent.
//! - **Errors**: MediaWiki reports most failures as HTTP 200 with an `error`
//!   object, which is surfaced as [`MediaWikiError::Api`].
//! - **No retries**: a single failed attempt is returned to the caller.

pub mod error;
pub mod request;
pub mod response;

pub use error::MediaWikiError;
pub use request::{ExtractsRequest, SearchRequest};
pub use response::{SearchHit, SearchResponse};

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header;
use serde::de::DeserializeOwned;
use wiki_search_core::AppConfig;
use wiki_search_core::config::DEFAULT_ENDPOINT;

use request::COMMON_PARAMS;
use response::{RawExtractsResponse, RawSearchResponse};

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = concat!("wiki-search/", env!("CARGO_PKG_VERSION"));

/// MediaWiki client configuration.
#[derive(Debug, Clone)]
pub struct MediaWikiConfig {
    /// API endpoint (default: https://en.wikipedia.org/w/api.php).
    pub endpoint: String,
    /// Request timeout (default: 10s).
    pub timeout: Duration,
    /// User-agent string (default: wiki-search/0.x).
    pub user_agent: String,
}

impl Default for MediaWikiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<&AppConfig> for MediaWikiConfig {
    fn from(config: &AppConfig) -> Self {
        Self { endpoint: config.endpoint.clone(), timeout: config.timeout(), user_agent: config.user_agent.clone() }
    }
}

/// MediaWiki Action API client.
#[derive(Debug, Clone)]
pub struct MediaWikiClient {
    http: reqwest::Client,
    config: MediaWikiConfig,
}

impl MediaWikiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MediaWikiConfig) -> Result<Self, MediaWikiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| MediaWikiError::Network(Arc::new(e)))?;

        Ok(Self { http, config })
    }

    /// Execute a full-text search (`list=search`).
    pub async fn search(&self, req: &SearchRequest) -> Result<SearchResponse, MediaWikiError> {
        req.validate()?;

        let start = Instant::now();
        tracing::debug!(query = %req.query, offset = req.offset, limit = req.limit, "searching MediaWiki");

        let raw: RawSearchResponse = self.get_json(&[("list", SearchRequest::LIST)], req).await?;
        let response = SearchResponse::try_from(raw)?;

        tracing::debug!(
            "search completed in {:?}, {} hits of {}",
            start.elapsed(),
            response.hits.len(),
            response.total_hits
        );

        Ok(response)
    }

    /// Look up page extracts (`prop=extracts`) for a batch of page ids.
    ///
    /// Returns the raw extract text keyed by page id. Pages the provider
    /// returns without an extract are omitted.
    pub async fn extracts(&self, req: &ExtractsRequest) -> Result<HashMap<String, String>, MediaWikiError> {
        if req.page_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let start = Instant::now();
        tracing::debug!(pageids = %req.batch_key(), "fetching MediaWiki extracts");

        let raw: RawExtractsResponse = self.get_json(&[("prop", ExtractsRequest::PROP)], req).await?;
        let extracts = raw.into_extracts()?;

        tracing::debug!("extracts completed in {:?}, {} of {} pages", start.elapsed(), extracts.len(), req.page_ids.len());

        Ok(extracts)
    }

    /// GET the endpoint with the common parameters plus `module` and `params`.
    async fn get_json<T, P>(&self, module: &[(&str, &str)], params: &P) -> Result<T, MediaWikiError>
    where
        T: DeserializeOwned,
        P: serde::Serialize + ?Sized,
    {
        let http_response = self
            .http
            .get(&self.config.endpoint)
            .header(header::ACCEPT, "application/json")
            .query(COMMON_PARAMS)
            .query(module)
            .query(params)
            .send()
            .await?;

        let status = http_response.status();
        tracing::debug!("MediaWiki API response status: {}", status);

        if status == 429 {
            return Err(MediaWikiError::RateLimited);
        }

        if !status.is_success() {
            return Err(MediaWikiError::HttpError { status: status.as_u16() });
        }

        let bytes = http_response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| MediaWikiError::Parse(e.to_string()))
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &MediaWikiConfig {
        &self.config
    }
}

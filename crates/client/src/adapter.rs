//! Result adapter: MediaWiki search hits to UI-ready result pages.
//!
//! ### Pipeline
//! - Trim the query; a blank query returns [`ResultPage::empty_query`] with no request.
//! - Optional pacing delay, then the primary `list=search` request.
//! - Snippets are cleaned ([`clean_html`]) and cut to the snippet budget.
//! - Best-effort `prop=extracts` lookup for long-form descriptions.
//! - Merge in provider ranking order.
//!
//! ### Failure model
//! `fetch_page` never fails. A failed primary request yields
//! [`ResultPage::failed`] (cursor `None`); a failed extract lookup is logged
//! and descriptions fall back to the full cleaned snippet.

use std::collections::HashMap;

use wiki_search_core::config::MAX_LIMIT;
use wiki_search_core::{AppConfig, Error, ResultItem, ResultPage};

use crate::mediawiki::{ExtractsRequest, MediaWikiClient, MediaWikiConfig, SearchHit, SearchRequest};
use crate::sanitize::{clean_html, truncate_with_ellipsis};

/// Translates provider responses into [`ResultPage`]s.
///
/// Holds no per-call state; clones share the underlying connection pool and
/// may be used concurrently.
#[derive(Debug, Clone)]
pub struct ResultAdapter {
    client: MediaWikiClient,
    config: AppConfig,
}

impl ResultAdapter {
    /// Build an adapter from application configuration.
    pub fn new(config: AppConfig) -> Result<Self, Error> {
        config.validate().map_err(|e| Error::InvalidInput(e.to_string()))?;

        let client = MediaWikiClient::new(MediaWikiConfig::from(&config))
            .map_err(|e| Error::InvalidInput(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Fetch the first page with the configured default page size.
    pub async fn fetch_first_page(&self, query: &str) -> ResultPage {
        self.fetch_page(query, 0, self.config.default_limit).await
    }

    /// Fetch one page of normalized results.
    ///
    /// `limit` is clamped into `1..=500`. Never fails: see the module docs for
    /// the degraded pages returned on error.
    pub async fn fetch_page(&self, query: &str, offset: u32, limit: u32) -> ResultPage {
        let query = query.trim();
        if query.is_empty() {
            return ResultPage::empty_query();
        }

        if let Some(delay) = self.config.pacing_delay() {
            tokio::time::sleep(delay).await;
        }

        match self.try_fetch_page(query, offset, clamp_limit(limit)).await {
            Ok(page) => page,
            Err(err) => {
                tracing::error!(error = %err, query, offset, "error fetching search results");
                ResultPage::failed()
            }
        }
    }

    async fn try_fetch_page(&self, query: &str, offset: u32, limit: u32) -> Result<ResultPage, Error> {
        let response = self
            .client
            .search(&SearchRequest::new(query, offset, limit))
            .await
            .map_err(|e| Error::PrimaryFetchFailed(e.to_string()))?;

        if response.hits.is_empty() {
            return Ok(ResultPage {
                results: Vec::new(),
                next_offset: response.next_offset,
                total_hits: response.total_hits,
            });
        }

        let descriptions = if self.config.enrich_descriptions {
            self.fetch_descriptions(response.page_ids()).await
        } else {
            HashMap::new()
        };

        let results = response
            .hits
            .iter()
            .map(|hit| self.build_item(hit, &descriptions))
            .collect();

        Ok(ResultPage { results, next_offset: response.next_offset, total_hits: response.total_hits })
    }

    /// Sanitized, budgeted extracts keyed by page id; empty on any failure.
    async fn fetch_descriptions(&self, page_ids: Vec<u64>) -> HashMap<String, String> {
        let req = ExtractsRequest::intro_plaintext(page_ids);

        match self.client.extracts(&req).await {
            Ok(extracts) => extracts
                .into_iter()
                .filter_map(|(id, extract)| {
                    let cleaned = clean_html(&extract);
                    (!cleaned.is_empty())
                        .then(|| (id, truncate_with_ellipsis(&cleaned, self.config.description_max_chars)))
                })
                .collect(),
            Err(e) => {
                let err = Error::EnrichmentFetchFailed(e.to_string());
                tracing::warn!(error = %err, pageids = %req.batch_key(), "falling back to snippet descriptions");
                HashMap::new()
            }
        }
    }

    fn build_item(&self, hit: &SearchHit, descriptions: &HashMap<String, String>) -> ResultItem {
        let id = hit.pageid.to_string();
        let clean_snippet = clean_html(&hit.snippet);
        let snippet = truncate_with_ellipsis(&clean_snippet, self.config.snippet_max_chars);
        let description = descriptions.get(&id).cloned().unwrap_or(clean_snippet);

        ResultItem {
            id,
            title: hit.title.clone(),
            snippet,
            description,
            source_label: self.config.source_label.clone(),
            trend_indicator: None,
            provider_id: hit.pageid,
        }
    }
}

fn clamp_limit(limit: u32) -> u32 {
    let clamped = limit.clamp(1, MAX_LIMIT);
    if clamped != limit {
        tracing::debug!(requested = limit, clamped, "page size clamped");
    }
    clamped
}

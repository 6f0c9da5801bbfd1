//! MediaWiki Action API request types and validation.

use serde::{Serialize, Serializer};

use crate::mediawiki::MediaWikiError;
use wiki_search_core::config::MAX_LIMIT;

/// Parameters every request carries: JSON output, anonymous CORS.
pub(crate) const COMMON_PARAMS: &[(&str, &str)] = &[("action", "query"), ("format", "json"), ("origin", "*")];

/// Full-text search parameters (`list=search`).
///
/// Based on the MediaWiki `list=search` module documentation:
/// https://www.mediawiki.org/wiki/API:Search
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    /// Search text.
    #[serde(rename = "srsearch")]
    pub query: String,

    /// Zero-based result offset.
    #[serde(rename = "sroffset")]
    pub offset: u32,

    /// Number of results (1-500).
    #[serde(rename = "srlimit")]
    pub limit: u32,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self { query: String::new(), offset: 0, limit: 10 }
    }
}

impl SearchRequest {
    /// Wire value of the `list` parameter.
    pub const LIST: &'static str = "search";

    pub fn new(query: impl Into<String>, offset: u32, limit: u32) -> Self {
        Self { query: query.into(), offset, limit }
    }

    /// Validate the search request parameters.
    ///
    /// Returns an error if the query is blank or the limit is out of range.
    pub fn validate(&self) -> Result<(), MediaWikiError> {
        if self.query.trim().is_empty() {
            return Err(MediaWikiError::InvalidQuery("query cannot be empty".to_string()));
        }

        if !(1..=MAX_LIMIT).contains(&self.limit) {
            return Err(MediaWikiError::InvalidLimit);
        }

        Ok(())
    }
}

/// Intro-only plain-text extract lookup (`prop=extracts`) for a batch of pages.
///
/// Based on the TextExtracts documentation:
/// https://www.mediawiki.org/wiki/Extension:TextExtracts#API
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractsRequest {
    /// Page ids, sent pipe-delimited.
    #[serde(rename = "pageids", serialize_with = "serialize_pipe_joined")]
    pub page_ids: Vec<u64>,

    /// Only the content before the first section heading.
    #[serde(skip_serializing_if = "is_false", serialize_with = "serialize_flag")]
    pub exintro: bool,

    /// Plain text instead of limited HTML.
    #[serde(skip_serializing_if = "is_false", serialize_with = "serialize_flag")]
    pub explaintext: bool,

    /// How many extracts to return; `max` lets the server decide.
    pub exlimit: &'static str,
}

impl ExtractsRequest {
    /// Wire value of the `prop` parameter.
    pub const PROP: &'static str = "extracts";

    /// Intro-only, plain-text extracts for the given pages.
    pub fn intro_plaintext(page_ids: Vec<u64>) -> Self {
        Self { page_ids, exintro: true, explaintext: true, exlimit: "max" }
    }

    /// The pipe-delimited batch key sent as `pageids`.
    pub fn batch_key(&self) -> String {
        pipe_joined(&self.page_ids)
    }
}

fn pipe_joined(ids: &[u64]) -> String {
    ids.iter().map(u64::to_string).collect::<Vec<_>>().join("|")
}

fn serialize_pipe_joined<S: Serializer>(ids: &[u64], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&pipe_joined(ids))
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// MediaWiki reads any present boolean parameter as true, even `0`, so a
/// false flag must be omitted rather than sent.
fn serialize_flag<S: Serializer>(_flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str("1")
}

//! MediaWiki Action API response types and normalization.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::mediawiki::MediaWikiError;

/// Error object MediaWiki returns with HTTP 200.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub info: String,
}

/// Raw response from `list=search`.
#[derive(Debug, Deserialize)]
pub struct RawSearchResponse {
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
    #[serde(default, rename = "continue")]
    pub continuation: Option<Continuation>,
    #[serde(default)]
    pub query: Option<SearchQuery>,
}

/// Continuation block; only `sroffset` matters here.
#[derive(Debug, Deserialize)]
pub struct Continuation {
    /// Kept untyped: anything but a JSON number means "no further page".
    #[serde(default)]
    pub sroffset: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub searchinfo: Option<SearchInfo>,
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub struct SearchInfo {
    #[serde(default)]
    pub totalhits: Option<u64>,
}

/// One raw hit from `list=search`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SearchHit {
    pub pageid: u64,
    pub title: String,
    /// HTML excerpt with `<span class="searchmatch">` highlighting.
    #[serde(default)]
    pub snippet: String,
}

/// Normalized primary search response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    /// Hits in provider ranking order.
    pub hits: Vec<SearchHit>,
    /// Total hits, 0 when the provider omits it.
    pub total_hits: u64,
    /// Continuation offset, `None` on the final page.
    pub next_offset: Option<u64>,
}

impl TryFrom<RawSearchResponse> for SearchResponse {
    type Error = MediaWikiError;

    /// Convert a raw `list=search` response, surfacing API error objects.
    fn try_from(raw: RawSearchResponse) -> Result<Self, Self::Error> {
        if let Some(err) = raw.error {
            return Err(MediaWikiError::Api { code: err.code, info: err.info });
        }

        let next_offset = raw
            .continuation
            .and_then(|c| c.sroffset)
            .and_then(|v| v.as_u64());

        let (hits, total_hits) = match raw.query {
            Some(q) => (q.search, q.searchinfo.and_then(|i| i.totalhits).unwrap_or(0)),
            None => (Vec::new(), 0),
        };

        Ok(SearchResponse { hits, total_hits, next_offset })
    }
}

impl SearchResponse {
    /// Check if the provider reported a further page.
    pub fn has_more(&self) -> bool {
        self.next_offset.is_some()
    }

    /// Page ids of all hits, in ranking order.
    pub fn page_ids(&self) -> Vec<u64> {
        self.hits.iter().map(|h| h.pageid).collect()
    }
}

/// Raw response from `prop=extracts`.
#[derive(Debug, Deserialize)]
pub struct RawExtractsResponse {
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
    #[serde(default)]
    pub query: Option<PagesQuery>,
}

#[derive(Debug, Deserialize)]
pub struct PagesQuery {
    /// Keyed by page id as a string; missing pages use negative keys.
    #[serde(default)]
    pub pages: HashMap<String, PageExtract>,
}

#[derive(Debug, Deserialize)]
pub struct PageExtract {
    #[serde(default)]
    pub extract: Option<String>,
}

impl RawExtractsResponse {
    /// Raw extract text keyed by page id; pages without an extract are skipped.
    pub fn into_extracts(self) -> Result<HashMap<String, String>, MediaWikiError> {
        if let Some(err) = self.error {
            return Err(MediaWikiError::Api { code: err.code, info: err.info });
        }

        Ok(self
            .query
            .map(|q| q.pages)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(id, page)| page.extract.map(|text| (id, text)))
            .collect())
    }
}

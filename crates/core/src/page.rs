//! Normalized result page handed to rendering layers.
//!
//! The serialized field names (`nextOffset`, `totalHits`, `source`, `trend`,
//! `pageid`) are the shape the UI consumes and must stay stable.

use serde::{Deserialize, Serialize};

/// One normalized search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Stable identifier, the provider page id rendered as a string.
    pub id: String,
    pub title: String,
    /// Short, cleaned and ellipsis-truncated excerpt.
    pub snippet: String,
    /// Long-form text: the page extract when enrichment succeeded, otherwise
    /// the full cleaned snippet.
    pub description: String,
    /// Constant provider badge (e.g. "Wikipedia").
    #[serde(rename = "source")]
    pub source_label: String,
    /// No trend data is available from the provider; always `None`.
    #[serde(rename = "trend")]
    pub trend_indicator: Option<String>,
    /// Raw provider page id.
    #[serde(rename = "pageid")]
    pub provider_id: u64,
}

/// A page of normalized results plus pagination state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    /// Results in provider ranking order.
    pub results: Vec<ResultItem>,
    /// Offset of the next page, or `None` when the provider signals no
    /// continuation (or the fetch failed).
    pub next_offset: Option<u64>,
    /// Total hits reported by the provider, 0 when absent.
    pub total_hits: u64,
}

impl ResultPage {
    /// Page returned when no query was submitted.
    ///
    /// The cursor is `Some(0)`, not `None`: "never attempted" is kept
    /// distinguishable from "attempted and failed".
    pub fn empty_query() -> Self {
        Self { results: Vec::new(), next_offset: Some(0), total_hits: 0 }
    }

    /// Page returned when the primary request failed.
    pub fn failed() -> Self {
        Self { results: Vec::new(), next_offset: None, total_hits: 0 }
    }

    /// Check if the provider reported a further page.
    ///
    /// An empty-query page reports `false` even though its cursor is `Some(0)`.
    pub fn has_more(&self) -> bool {
        !self.results.is_empty() && self.next_offset.is_some()
    }

    /// Get the number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

//! Unified error types for wiki-search.
//!
//! The adapter never returns these across its public boundary. They exist so
//! that failures are classified and logged consistently before being folded
//! into a degraded `ResultPage`.

/// Unified error types for the result adapter.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (e.g., an unparsable endpoint).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// The primary search request failed or returned an unusable body.
    #[error("PRIMARY_FETCH_FAILED: {0}")]
    PrimaryFetchFailed(String),

    /// The extract lookup failed; results fall back to cleaned snippets.
    #[error("ENRICHMENT_FETCH_FAILED: {0}")]
    EnrichmentFetchFailed(String),
}

//! MediaWiki API client error types.

use std::sync::Arc;

/// Errors from the MediaWiki Action API client.
#[derive(Debug, thiserror::Error)]
pub enum MediaWikiError {
    /// Invalid search query.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Invalid limit parameter (must be 1-500).
    #[error("invalid limit: must be 1-500")]
    InvalidLimit,

    /// Rate limited by the provider.
    #[error("rate limited: too many requests")]
    RateLimited,

    /// HTTP error response.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// The API answered 200 with an `error` object.
    #[error("API error {code}: {info}")]
    Api { code: String, info: String },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for MediaWikiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { MediaWikiError::Timeout } else { MediaWikiError::Network(Arc::new(err)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MediaWikiError::InvalidQuery("test".to_string());
        assert!(err.to_string().contains("invalid query"));

        let err = MediaWikiError::HttpError { status: 503 };
        assert_eq!(err.to_string(), "HTTP error: 503");

        let err = MediaWikiError::Api { code: "badvalue".to_string(), info: "Unrecognized value".to_string() };
        assert!(err.to_string().contains("badvalue"));
        assert!(err.to_string().contains("Unrecognized value"));
    }
}

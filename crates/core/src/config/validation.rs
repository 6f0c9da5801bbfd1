//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Largest page size the provider serves to ordinary clients.
pub const MAX_LIMIT: u32 = 500;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    fn invalid(field: &str, reason: &str) -> Self {
        ConfigError::Invalid { field: field.into(), reason: reason.into() }
    }
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `endpoint` is not an absolute http(s) URL
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `pacing_delay_ms` exceeds 10 seconds
    /// - `default_limit` is outside 1..=500
    /// - either character budget is 0
    /// - `user_agent` or `source_label` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        match url::Url::parse(&self.endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(_) => return Err(ConfigError::invalid("endpoint", "scheme must be http or https")),
            Err(e) => return Err(ConfigError::invalid("endpoint", &e.to_string())),
        }

        if self.timeout_ms < 100 {
            return Err(ConfigError::invalid("timeout_ms", "must be at least 100ms"));
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::invalid("timeout_ms", "must not exceed 5 minutes (300000ms)"));
        }

        if self.pacing_delay_ms > 10_000 {
            return Err(ConfigError::invalid("pacing_delay_ms", "must not exceed 10 seconds (10000ms)"));
        }

        if !(1..=MAX_LIMIT).contains(&self.default_limit) {
            return Err(ConfigError::invalid("default_limit", "must be between 1 and 500"));
        }

        if self.snippet_max_chars == 0 {
            return Err(ConfigError::invalid("snippet_max_chars", "must be greater than 0"));
        }
        if self.description_max_chars == 0 {
            return Err(ConfigError::invalid("description_max_chars", "must be greater than 0"));
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::invalid("user_agent", "must not be empty"));
        }
        if self.source_label.is_empty() {
            return Err(ConfigError::invalid("source_label", "must not be empty"));
        }

        if self.description_max_chars < self.snippet_max_chars {
            tracing::warn!(
                snippet_max_chars = self.snippet_max_chars,
                description_max_chars = self.description_max_chars,
                "description budget is smaller than the snippet budget; \
                 enriched descriptions will be shorter than snippets"
            );
        }

        Ok(())
    }
}

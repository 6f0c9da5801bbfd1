//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (WIKI_SEARCH_*)
//! 2. TOML config file (if WIKI_SEARCH_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::{ConfigError, MAX_LIMIT};

/// Default MediaWiki Action API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (WIKI_SEARCH_*)
/// 2. TOML config file (if WIKI_SEARCH_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// MediaWiki Action API endpoint used for both search and extract lookups.
    ///
    /// Set via WIKI_SEARCH_ENDPOINT environment variable.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via WIKI_SEARCH_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// HTTP request timeout in milliseconds, applied by the HTTP client.
    ///
    /// Set via WIKI_SEARCH_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Fixed wait before the primary request so loaders stay visible. 0 disables it.
    ///
    /// Set via WIKI_SEARCH_PACING_DELAY_MS environment variable.
    #[serde(default = "default_pacing_delay_ms")]
    pub pacing_delay_ms: u64,

    /// Page size used when the caller does not pass one.
    ///
    /// Set via WIKI_SEARCH_DEFAULT_LIMIT environment variable.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Character budget of the short snippet.
    #[serde(default = "default_snippet_max_chars")]
    pub snippet_max_chars: usize,

    /// Character budget of descriptions sourced from page extracts.
    #[serde(default = "default_description_max_chars")]
    pub description_max_chars: usize,

    /// Badge attached to every result.
    #[serde(default = "default_source_label")]
    pub source_label: String,

    /// Whether to fetch page extracts for long-form descriptions.
    ///
    /// Set via WIKI_SEARCH_ENRICH_DESCRIPTIONS environment variable.
    #[serde(default = "default_true")]
    pub enrich_descriptions: bool,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.into()
}

fn default_user_agent() -> String {
    concat!("wiki-search/", env!("CARGO_PKG_VERSION")).into()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_pacing_delay_ms() -> u64 {
    400
}

fn default_limit() -> u32 {
    10
}

fn default_snippet_max_chars() -> usize {
    160
}

fn default_description_max_chars() -> usize {
    600
}

fn default_source_label() -> String {
    "Wikipedia".into()
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            pacing_delay_ms: default_pacing_delay_ms(),
            default_limit: default_limit(),
            snippet_max_chars: default_snippet_max_chars(),
            description_max_chars: default_description_max_chars(),
            source_label: default_source_label(),
            enrich_descriptions: true,
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Pacing delay as Duration, `None` when disabled.
    pub fn pacing_delay(&self) -> Option<Duration> {
        (self.pacing_delay_ms > 0).then(|| Duration::from_millis(self.pacing_delay_ms))
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `WIKI_SEARCH_`
    /// 2. TOML file from `WIKI_SEARCH_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("WIKI_SEARCH_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("WIKI_SEARCH_")
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}

//! Client code for wiki-search.
//!
//! This crate provides the MediaWiki API client, snippet sanitization, and the
//! result adapter that turns provider responses into `ResultPage`s.

pub mod adapter;
pub mod mediawiki;
pub mod sanitize;

pub use adapter::ResultAdapter;
pub use mediawiki::{
    ExtractsRequest, MediaWikiClient, MediaWikiConfig, MediaWikiError, SearchHit, SearchRequest, SearchResponse,
};
pub use sanitize::{ELLIPSIS, clean_html, truncate_with_ellipsis};

pub use wiki_search_core::{AppConfig, ResultItem, ResultPage};

//! Core types and shared functionality for wiki-search.
//!
//! This crate provides:
//! - Layered configuration (`AppConfig`)
//! - Unified error types
//! - The normalized result page handed to rendering layers

pub mod config;
pub mod error;
pub mod page;

pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use page::{ResultItem, ResultPage};

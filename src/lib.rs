//! Kliping: a date-indexed news article harvester
//!
//! This crate implements a two-stage pipeline: crawl paginated index pages
//! per calendar day to discover article URLs, then fetch each article with
//! bounded retries and persist the extracted fields as CSV rows.

pub mod config;
pub mod crawler;
pub mod dispatch;
pub mod output;
pub mod scrape;
pub mod state;

use thiserror::Error;

/// Main error type for harvester operations
#[derive(Debug, Error)]
pub enum KlipingError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for harvester operations
pub type Result<T> = std::result::Result<T, KlipingError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::ArticleLink;
pub use scrape::ArticleRecord;
pub use state::{CrawlWindow, FetchAttempt, PageCursor};

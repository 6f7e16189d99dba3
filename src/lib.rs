//! Philosophy-Walk: a "Getting to Philosophy" experiment
//!
//! This crate follows the first qualifying in-article link of a Wikipedia page,
//! over and over, until it reaches the "Philosophy" article, runs into a cycle or
//! dead end, or exhausts its page budget. Along the way it counts the words of
//! every visited article.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod text;

use thiserror::Error;

/// Main error type for Philosophy-Walk operations
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
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

/// Errors that abort a walk while turning a URL into a page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("{url} is not an HTML page (Content-Type: {content_type})")]
    ContentMismatch { url: String, content_type: String },

    #[error("failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },

    #[error("{url} has no {selector} element")]
    MissingNode { url: String, selector: &'static str },
}

/// Result type alias for Philosophy-Walk operations
pub type Result<T> = std::result::Result<T, WalkError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlReport, Crawler};
pub use output::WordStatistics;
pub use state::{CrawlState, VisitedSet};
pub use text::normalize_word;

//! Configuration module for Philosophy-Walk
//!
//! This module handles loading, parsing, and validating TOML configuration files,
//! and merging them with command-line overrides.
//! Every key is optional; a missing file section falls back to the defaults that
//! reproduce the classic experiment against English Wikipedia.
//!
//! # Example
//!
//! ```no_run
//! use philosophy_walk::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("walk.toml")).unwrap();
//! println!("Walk will visit at most {} pages", config.crawl.max_pages);
//! ```

mod overrides;
mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlConfig, UserAgentConfig, DEFAULT_MAX_PAGES, DEFAULT_ORIGIN, DEFAULT_START_URL,
    PHILOSOPHY_HEADING,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use overrides::{apply_overrides, CliOverrides, CLI_DEFAULT_MAX_PAGES};
pub use validation::validate;

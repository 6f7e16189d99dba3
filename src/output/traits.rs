//! Output handler traits and types
//!
//! This module defines the trait interface for everything that turns a
//! finished walk into output, plus the associated error type.

use crate::crawler::CrawlReport;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for output handlers that consume a finished walk
pub trait OutputHandler {
    /// Writes the report to this handler's destination
    fn write_report(&mut self, report: &CrawlReport) -> OutputResult<()>;
}

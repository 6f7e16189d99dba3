//! Output module for reporting walk results
//!
//! This module handles:
//! - Aggregating word statistics across visited pages
//! - Printing the verdict and statistics lines to stdout
//! - Writing an optional markdown summary of the walk

mod markdown;
mod report;
pub mod stats;
mod traits;

pub use markdown::{format_markdown_summary, MarkdownSummary};
pub use report::{format_top_words, statistics_lines, verdict_lines, StdoutReport};
pub use stats::{WordStatistics, TOP_WORDS};
pub use traits::{OutputError, OutputHandler, OutputResult};

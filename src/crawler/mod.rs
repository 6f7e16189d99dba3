//! Crawler module for walking from article to article
//!
//! This module contains the core walking logic, including:
//! - HTTP fetching with redirect tracking
//! - Article parsing (heading and main content)
//! - First-link selection
//! - The walk controller and its state machine

mod controller;
mod fetcher;
mod page;
mod selector;

pub use controller::{CrawlReport, Crawler, WalkStep};
pub use fetcher::{build_http_client, fetch_page};
pub use page::{ContentNode, Page, PageView, CONTENT_SELECTOR, HEADING_SELECTOR};
pub use selector::{article_url, is_qualifying_link, select_next_link, WIKI_PREFIX};

use crate::config::Config;
use crate::WalkError;

/// Runs a complete walk
///
/// This is the main entry point for starting a walk. It will:
/// 1. Build the HTTP client
/// 2. Fetch pages and follow first links until a terminal state
/// 3. Return the report with the outcome and word statistics
///
/// # Returns
///
/// * `Ok(CrawlReport)` - The walk ran to a terminal state (which may be `Failed`)
/// * `Err(WalkError)` - The walk could not be started
pub async fn walk(config: &Config) -> Result<CrawlReport, WalkError> {
    let crawler = Crawler::new(config)?;
    Ok(crawler.run().await)
}

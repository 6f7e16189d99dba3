//! State module for tracking walk progress
//!
//! # Components
//!
//! - `CrawlState`: where the walk stands (running or one of its terminal outcomes)
//! - `VisitedSet`: final URLs already fetched during this run, used for cycle detection

mod crawl_state;
mod visited;

// Re-export main types
pub use crawl_state::CrawlState;
pub use visited::VisitedSet;

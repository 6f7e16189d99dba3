//! First-link selection
//!
//! Picks the link the walk follows next: the first anchor in the article body
//! that points at another article and has not been visited yet.
//!
//! Links inside parentheses or italics are NOT skipped. The classic rule of the
//! game excludes them; this walk deliberately follows the plain first link.

use crate::crawler::page::ContentNode;
use crate::state::VisitedSet;

/// Path prefix shared by every article href
pub const WIKI_PREFIX: &str = "/wiki";

/// Returns true if `href` points at an article
///
/// The href must start with `/wiki` and contain no colon. The colon rule drops
/// namespaced pages (`File:`, `Category:`, `Special:`, `Help:` ...) as well as
/// any protocol-qualified href.
pub fn is_qualifying_link(href: &str) -> bool {
    href.starts_with(WIKI_PREFIX) && !href.contains(':')
}

/// Builds the absolute URL of an article href
pub fn article_url(origin: &str, href: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), href)
}

/// Chooses the next URL to visit
///
/// Qualifying anchors are tried in document order; the first one whose
/// absolute URL is not in `visited` wins.
///
/// # Returns
///
/// * `Some(String)` - Absolute URL of the chosen article
/// * `None` - Every qualifying link was already visited, or there were none
pub fn select_next_link<N>(content: &N, visited: &VisitedSet, origin: &str) -> Option<String>
where
    N: ContentNode + ?Sized,
{
    content
        .anchor_hrefs()
        .into_iter()
        .filter(|href| is_qualifying_link(href))
        .map(|href| article_url(origin, href))
        .find(|url| !visited.contains(url))
}

//! HTTP fetcher implementation
//!
//! This module turns a URL into a parsed [`Page`]:
//! - Building the HTTP client with a descriptive user agent
//! - Following redirects (the final URL is what the walk records as visited)
//! - Rejecting error statuses and non-HTML responses
//!
//! There is no retry logic; one failed fetch ends the walk.

use crate::config::UserAgentConfig;
use crate::crawler::page::Page;
use crate::FetchError;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// Maximum redirect hops followed for a single request
const MAX_REDIRECTS: usize = 10;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout` - Total time allowed for one request
///
/// # Example
///
/// ```no_run
/// use philosophy_walk::config::UserAgentConfig;
/// use philosophy_walk::crawler::build_http_client;
/// use std::time::Duration;
///
/// let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(30)).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and parses it as an article page
///
/// # Request Flow
///
/// 1. Send GET request, following up to 10 redirects
/// 2. Non-2xx status → `FetchError::Status`
/// 3. Content-Type without `text/html` → `FetchError::ContentMismatch`
/// 4. Read the body and parse it, keyed by the post-redirect URL
///
/// Transport failures (DNS, refused connection, timeout, redirect loop) come
/// back as `FetchError::Network`.
pub async fn fetch_page(client: &Client, url: &str) -> Result<Page, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Network {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    let final_url = response.url().to_string();

    if final_url != url {
        tracing::debug!("{} redirected to {}", url, final_url);
    }

    if !status.is_success() {
        return Err(FetchError::Status {
            url: final_url,
            status: status.as_u16(),
        });
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !is_html_content_type(&content_type) {
        return Err(FetchError::ContentMismatch {
            url: final_url,
            content_type,
        });
    }

    let body = response.text().await.map_err(|source| FetchError::Body {
        url: final_url.clone(),
        source,
    })?;

    tracing::trace!("Fetched {} ({} bytes)", final_url, body.len());

    Ok(Page::parse(final_url, &body))
}

/// Media types are case-insensitive, so `TEXT/HTML` is HTML too
fn is_html_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("text/html")
}

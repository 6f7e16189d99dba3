use serde::Deserialize;

/// Special page that redirects to a random article
pub const DEFAULT_START_URL: &str = "https://en.wikipedia.org/wiki/Special:Random";

/// Origin prefixed to every `/wiki/...` href
pub const DEFAULT_ORIGIN: &str = "https://en.wikipedia.org";

/// Page budget used when nothing else is configured
pub const DEFAULT_MAX_PAGES: u32 = 100;

/// Heading text that ends the walk successfully
pub const PHILOSOPHY_HEADING: &str = "Philosophy";

/// Main configuration structure for Philosophy-Walk
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawl: CrawlConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
}

/// Walk behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// First URL requested by the walk
    #[serde(rename = "start-url")]
    pub start_url: String,

    /// Maximum number of pages fetched before giving up
    #[serde(rename = "max-pages")]
    pub max_pages: u32,

    /// Scheme and host that article hrefs are resolved against
    pub origin: String,

    /// Heading that counts as reaching the goal
    #[serde(rename = "target-heading")]
    pub target_heading: String,

    /// Per-request timeout (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            start_url: DEFAULT_START_URL.to_string(),
            max_pages: DEFAULT_MAX_PAGES,
            origin: DEFAULT_ORIGIN.to_string(),
            target_heading: PHILOSOPHY_HEADING.to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: env!("CARGO_PKG_NAME").to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://en.wikipedia.org/wiki/Wikipedia:Getting_to_Philosophy"
                .to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the User-Agent header value: `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (+{})",
            self.crawler_name, self.crawler_version, self.contact_url
        )
    }
}

//! Walk controller - the iterate-fetch-select-stop loop
//!
//! Each iteration fetches the current URL, records its final URL as visited,
//! feeds its words to the statistics, prints its heading and then either stops
//! or moves on to the first unvisited article link.

use crate::config::{Config, CrawlConfig};
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::page::{ContentNode, Page};
use crate::crawler::selector::select_next_link;
use crate::output::WordStatistics;
use crate::state::{CrawlState, VisitedSet};
use crate::text::extract_words;
use crate::WalkError;
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::io::{self, Write};
use std::time::Duration;

/// One fetched page on the walk path
#[derive(Debug, Clone)]
pub struct WalkStep {
    /// URL requested in this iteration
    pub url: String,

    /// URL the page was served from after redirects
    pub final_url: String,

    /// Article heading
    pub heading: String,

    /// Number of counted words on the page
    pub word_count: usize,
}

/// Everything a finished walk produced
#[derive(Debug)]
pub struct CrawlReport {
    /// Terminal state of the walk
    pub state: CrawlState,

    /// Heading the walk was looking for
    pub target_heading: String,

    /// Page budget of the walk
    pub max_pages: u32,

    /// Word statistics across every fetched page
    pub statistics: WordStatistics,

    /// Final URLs fetched during the walk
    pub visited: VisitedSet,

    /// Fetched pages in visiting order
    pub steps: Vec<WalkStep>,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlReport {
    /// Number of pages fetched successfully
    pub fn pages_visited(&self) -> usize {
        self.steps.len()
    }

    /// Wall-clock duration of the walk
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

/// Drives a single walk from the start URL to a terminal state
pub struct Crawler {
    config: CrawlConfig,
    client: Client,

    /// URL requested by the next iteration
    current_url: String,

    /// 0-based index of the next iteration
    iteration: u32,

    visited: VisitedSet,
    statistics: WordStatistics,
    steps: Vec<WalkStep>,
    state: CrawlState,

    /// Construction time, reset when `run` begins
    started_at: DateTime<Utc>,
}

impl Crawler {
    /// Creates a crawler with an HTTP client built from the configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to walk from `config.crawl.start_url`
    /// * `Err(WalkError)` - The HTTP client could not be built
    pub fn new(config: &Config) -> Result<Self, WalkError> {
        let client = build_http_client(
            &config.user_agent,
            Duration::from_secs(config.crawl.request_timeout_secs),
        )?;
        Ok(Self::with_client(config.crawl.clone(), client))
    }

    /// Creates a crawler that uses an existing HTTP client
    pub fn with_client(config: CrawlConfig, client: Client) -> Self {
        Self {
            current_url: config.start_url.clone(),
            config,
            client,
            iteration: 0,
            visited: VisitedSet::new(),
            statistics: WordStatistics::new(),
            steps: Vec::new(),
            state: CrawlState::Running,
            started_at: Utc::now(),
        }
    }

    pub fn state(&self) -> &CrawlState {
        &self.state
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Number of iterations that fetched a page
    pub fn iterations(&self) -> u32 {
        self.iteration
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    pub fn statistics(&self) -> &WordStatistics {
        &self.statistics
    }

    /// Runs one iteration, printing the page heading to stdout
    pub async fn step(&mut self) -> &CrawlState {
        self.step_with(&mut io::stdout()).await
    }

    /// Runs one iteration and returns the resulting state
    ///
    /// The heading of the fetched page is written to `progress`. Calling this
    /// on a crawler that already reached a terminal state does nothing.
    pub async fn step_with<W: Write>(&mut self, progress: &mut W) -> &CrawlState {
        if self.state.is_terminal() {
            return &self.state;
        }

        let url = self.current_url.clone();
        tracing::debug!("Iteration {}: fetching {}", self.iteration, url);

        let fetched = fetch_page(&self.client, &url).await;
        self.state = match fetched {
            Ok(page) => self.process_page(url, &page, progress),
            Err(error) => {
                tracing::warn!("Walk aborted at {}: {}", url, error);
                CrawlState::Failed { url, error }
            }
        };

        &self.state
    }

    /// Steps until a terminal state is reached, printing headings to stdout
    pub async fn run(self) -> CrawlReport {
        self.run_with(&mut io::stdout()).await
    }

    /// Steps until a terminal state is reached and hands back the report
    ///
    /// One heading line per fetched page is written to `progress`.
    pub async fn run_with<W: Write>(mut self, progress: &mut W) -> CrawlReport {
        self.started_at = Utc::now();
        tracing::info!(
            "Starting walk from {} (max {} pages)",
            self.current_url,
            self.config.max_pages
        );

        while !self.state.is_terminal() {
            self.step_with(progress).await;
        }

        tracing::info!(
            "Walk finished: {} after {} pages",
            self.state,
            self.steps.len()
        );

        CrawlReport {
            state: self.state,
            target_heading: self.config.target_heading,
            max_pages: self.config.max_pages,
            statistics: self.statistics,
            visited: self.visited,
            steps: self.steps,
            started_at: self.started_at,
            finished_at: Utc::now(),
        }
    }

    /// Applies one fetched page to the walk and decides the next state
    fn process_page<W: Write>(
        &mut self,
        url: String,
        page: &Page,
        progress: &mut W,
    ) -> CrawlState {
        let index = self.iteration;

        let view = match page.view() {
            Ok(view) => view,
            Err(error) => {
                tracing::warn!("Walk aborted at {}: {}", url, error);
                return CrawlState::Failed { url, error };
            }
        };

        self.iteration += 1;
        self.visited.insert(page.final_url());

        let words = extract_words(view.content.text_fragments());
        self.statistics.record_page(&words);

        if let Err(e) = writeln!(progress, "{}", view.heading).and_then(|_| progress.flush()) {
            tracing::warn!("Failed to print heading: {}", e);
        }
        tracing::debug!(
            "{} ({}): {} words, {} visited",
            view.heading,
            page.final_url(),
            words.len(),
            self.visited.len()
        );

        self.steps.push(WalkStep {
            url: url.clone(),
            final_url: page.final_url().to_string(),
            heading: view.heading.clone(),
            word_count: words.len(),
        });

        if view.heading == self.config.target_heading {
            return CrawlState::FoundPhilosophy { iterations: index };
        }

        match select_next_link(&view.content, &self.visited, &self.config.origin) {
            None => CrawlState::DeadEnd { url },
            Some(next) => {
                tracing::trace!("Next link: {}", next);
                self.current_url = next;
                if self.iteration >= self.config.max_pages {
                    CrawlState::Exhausted {
                        pages: self.config.max_pages,
                    }
                } else {
                    CrawlState::Running
                }
            }
        }
    }
}

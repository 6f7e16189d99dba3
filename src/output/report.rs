//! Plain-text report printed at the end of a walk
//!
//! The wording is fixed so runs can be compared line by line.

use crate::crawler::CrawlReport;
use crate::output::stats::{WordStatistics, TOP_WORDS};
use crate::output::traits::{OutputHandler, OutputResult};
use crate::state::CrawlState;
use std::io::{self, Write};

/// Returns the verdict lines for a terminal state
///
/// `Running` has no verdict and yields no lines.
pub fn verdict_lines(state: &CrawlState, target_heading: &str) -> Vec<String> {
    match state {
        CrawlState::Running => Vec::new(),
        CrawlState::FoundPhilosophy { iterations } => vec![format!(
            "The Wiki phenomenon exist! Got to \"{}\" page in {} iterations",
            target_heading, iterations
        )],
        CrawlState::DeadEnd { url } => vec![
            "Infinite loop among wiki pages have been found".to_string(),
            format!("Current url for that page is {}", url),
        ],
        CrawlState::Exhausted { pages } => vec![format!(
            "During {} iterations no Wiki phenomenon found. You might want to increase the \
             number of iterations or start with the other page",
            pages
        )],
        CrawlState::Failed { url, error } => vec![format!("Failed to fetch {}: {}", url, error)],
    }
}

/// Returns the two statistics lines, or `None` when `pages` is 0
pub fn statistics_lines(statistics: &WordStatistics, pages: u32) -> Option<[String; 2]> {
    let average = statistics.average_words_per_page(pages)?;
    Some([
        format!(
            "The ten of the mostly used words in Wiki during our experiment are: {}",
            format_top_words(&statistics.top_words(TOP_WORDS))
        ),
        format!("Average number of words into Wiki articles are: {}", average),
    ])
}

/// Formats `(word, count)` pairs as `[('the', 50), ('of', 12)]`
pub fn format_top_words(words: &[(String, u64)]) -> String {
    let entries: Vec<String> = words
        .iter()
        .map(|(word, count)| format!("({}, {})", quote_word(word), count))
        .collect();
    format!("[{}]", entries.join(", "))
}

/// Quotes a word the way the historical report printed it
///
/// Single quotes are used unless the word holds a `'` and no `"`.
fn quote_word(word: &str) -> String {
    let quote = if word.contains('\'') && !word.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(word.len() + 2);
    quoted.push(quote);
    for c in word.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c == quote => {
                quoted.push('\\');
                quoted.push(c);
            }
            c => quoted.push(c),
        }
    }
    quoted.push(quote);
    quoted
}

/// Writes the verdict and, where the outcome calls for it, the statistics
pub struct StdoutReport<W: Write = io::Stdout> {
    out: W,
}

impl StdoutReport {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for StdoutReport {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StdoutReport<W> {
    /// Writes to an arbitrary sink instead of stdout
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputHandler for StdoutReport<W> {
    fn write_report(&mut self, report: &CrawlReport) -> OutputResult<()> {
        for line in verdict_lines(&report.state, &report.target_heading) {
            writeln!(self.out, "{}", line)?;
        }

        if let Some(pages) = report.state.pages_for_statistics() {
            if let Some(lines) = statistics_lines(&report.statistics, pages) {
                for line in lines {
                    writeln!(self.out, "{}", line)?;
                }
            }
        }

        self.out.flush()?;
        Ok(())
    }
}

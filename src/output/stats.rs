//! Word statistics accumulated over a walk
//!
//! Every visited page contributes its words; the aggregate answers two
//! questions at the end of a run: which words are the most common, and how long
//! is an average article.

use std::collections::HashMap;

/// Number of words listed in the final report
pub const TOP_WORDS: usize = 10;

/// Word counts and totals for one walk
#[derive(Debug, Clone, Default)]
pub struct WordStatistics {
    /// Occurrences per normalized word; keys are never empty
    counts: HashMap<String, u64>,

    /// Words seen across all recorded pages, duplicates included
    total_words: u64,

    /// Number of pages passed to `record_page`
    pages_recorded: u32,
}

impl WordStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the words of one page
    ///
    /// Empty strings are ignored so the counter never holds an empty key; the
    /// normalizer already drops them, this keeps the invariant for any caller.
    pub fn record_page(&mut self, words: &[String]) {
        let mut recorded = 0u64;
        for word in words.iter().filter(|w| !w.is_empty()) {
            *self.counts.entry(word.clone()).or_insert(0) += 1;
            recorded += 1;
        }
        self.total_words += recorded;
        self.pages_recorded += 1;
    }

    /// Returns the `n` most frequent words, most frequent first
    ///
    /// Equal counts are ordered alphabetically so the result is deterministic.
    pub fn top_words(&self, n: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }

    /// Average number of words per page, truncated toward zero
    ///
    /// Returns `None` when `iterations` is 0.
    pub fn average_words_per_page(&self, iterations: u32) -> Option<u64> {
        self.total_words.checked_div(u64::from(iterations))
    }

    /// Occurrences of `word` so far
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }

    pub fn pages_recorded(&self) -> u32 {
        self.pages_recorded
    }
}

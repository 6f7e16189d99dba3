//! Markdown summary generation
//!
//! This module generates a human-readable markdown summary of a walk: the
//! outcome, the path of articles visited and the word statistics.

use crate::crawler::CrawlReport;
use crate::output::stats::TOP_WORDS;
use crate::output::traits::{OutputHandler, OutputResult};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Writes the markdown summary of a walk to a file
#[derive(Debug, Clone)]
pub struct MarkdownSummary {
    path: PathBuf,
    config_hash: Option<String>,
}

impl MarkdownSummary {
    /// # Arguments
    ///
    /// * `path` - Where the markdown file is written
    /// * `config_hash` - Hash of the configuration file, if one was used
    pub fn new(path: impl Into<PathBuf>, config_hash: Option<String>) -> Self {
        Self {
            path: path.into(),
            config_hash,
        }
    }
}

impl OutputHandler for MarkdownSummary {
    fn write_report(&mut self, report: &CrawlReport) -> OutputResult<()> {
        let markdown = format_markdown_summary(report, self.config_hash.as_deref());

        let mut file = File::create(&self.path)?;
        file.write_all(markdown.as_bytes())?;

        tracing::info!("Summary written to {}", self.path.display());
        Ok(())
    }
}

/// Formats a walk report as markdown
pub fn format_markdown_summary(report: &CrawlReport, config_hash: Option<&str>) -> String {
    let mut md = String::new();

    // Title
    md.push_str("# Getting to Philosophy: Walk Summary\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Started**: {}\n", report.started_at.to_rfc3339()));
    md.push_str(&format!(
        "- **Finished**: {}\n",
        report.finished_at.to_rfc3339()
    ));
    let duration_ms = report.duration().num_milliseconds();
    md.push_str(&format!(
        "- **Duration**: {:.2} seconds\n",
        duration_ms as f64 / 1000.0
    ));
    md.push_str(&format!("- **Outcome**: {}\n", report.state.label()));
    md.push_str(&format!("- **Detail**: {}\n", report.state));
    md.push_str(&format!("- **Target**: {}\n", report.target_heading));
    md.push_str(&format!("- **Page Budget**: {}\n", report.max_pages));
    if let Some(hash) = config_hash {
        md.push_str(&format!("- **Config Hash**: {}\n", hash));
    }
    md.push('\n');

    // Walk path
    md.push_str("## Path\n\n");
    if report.steps.is_empty() {
        md.push_str("No page was fetched.\n\n");
    } else {
        md.push_str("| # | Heading | URL | Words |\n");
        md.push_str("|---|---------|-----|-------|\n");
        for (index, step) in report.steps.iter().enumerate() {
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                index,
                escape_cell(&step.heading),
                step.final_url,
                step.word_count
            ));
        }
        md.push('\n');
    }

    // Word statistics
    let statistics = &report.statistics;
    md.push_str("## Word Statistics\n\n");
    md.push_str(&format!("- **Pages Visited**: {}\n", report.pages_visited()));
    md.push_str(&format!("- **Unique URLs**: {}\n", report.visited.len()));
    md.push_str(&format!("- **Total Words**: {}\n", statistics.total_words()));
    md.push_str(&format!(
        "- **Distinct Words**: {}\n",
        statistics.distinct_words()
    ));
    if let Some(average) = statistics.average_words_per_page(statistics.pages_recorded()) {
        md.push_str(&format!("- **Average Words per Page**: {}\n", average));
    }
    md.push('\n');

    let top = statistics.top_words(TOP_WORDS);
    if !top.is_empty() {
        md.push_str("### Most Frequent Words\n\n");
        md.push_str("| Word | Count |\n");
        md.push_str("|------|-------|\n");
        for (word, count) in top {
            md.push_str(&format!("| {} | {} |\n", escape_cell(&word), count));
        }
        md.push('\n');
    }

    md
}

/// Escapes characters that would break a markdown table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

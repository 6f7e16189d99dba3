//! Philosophy-Walk main entry point
//!
//! This is the command-line interface for the "Getting to Philosophy" walker.

use clap::Parser;
use philosophy_walk::config::{
    apply_overrides, load_config_with_hash, CliOverrides, Config, CLI_DEFAULT_MAX_PAGES,
};
use philosophy_walk::crawler::Crawler;
use philosophy_walk::output::{MarkdownSummary, OutputHandler, StdoutReport};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Philosophy-Walk: follow first links until you reach Philosophy
///
/// Starting from an article (a random one by default), repeatedly follows the
/// first article link of the main text until the "Philosophy" article is
/// reached, a page links only to pages already seen, or the page budget is
/// spent. Prints every heading on the way, then a verdict and word statistics.
#[derive(Parser, Debug)]
#[command(name = "philosophy-walk")]
#[command(version)]
#[command(about = "Tests the Getting to Philosophy phenomenon", long_about = None)]
struct Cli {
    /// Article URL to start from [default: a random article]
    #[arg(value_name = "START_URL")]
    start_url: Option<String>,

    /// Maximum number of pages to visit [default: 1000]
    #[arg(short = 'n', long, value_name = "N")]
    max_pages: Option<u32>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Write a markdown summary of the walk to this path
    #[arg(long, value_name = "PATH")]
    summary: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let (config, config_hash) = match load_configuration(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let crawler = match Crawler::new(&config) {
        Ok(crawler) => crawler,
        Err(e) => {
            tracing::error!("Failed to start walk: {}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let report = crawler.run().await;

    let mut handlers: Vec<Box<dyn OutputHandler>> = vec![Box::new(StdoutReport::new())];
    if let Some(path) = cli.summary {
        handlers.push(Box::new(MarkdownSummary::new(path, config_hash)));
    }

    let mut output_failed = false;
    for handler in &mut handlers {
        if let Err(e) = handler.write_report(&report) {
            tracing::error!("Failed to write report: {}", e);
            output_failed = true;
        }
    }

    if report.state.is_error() || output_failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout carries only headings and the report.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("philosophy_walk=info,warn"),
            1 => EnvFilter::new("philosophy_walk=debug,info"),
            2 => EnvFilter::new("philosophy_walk=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Builds the effective configuration: file (if any), then CLI overrides
fn load_configuration(
    cli: &Cli,
) -> Result<(Config, Option<String>), philosophy_walk::ConfigError> {
    let (file_config, config_hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (Some(config), Some(hash))
        }
        None => {
            tracing::debug!("No config file, page budget defaults to {}", CLI_DEFAULT_MAX_PAGES);
            (None, None)
        }
    };

    let overrides = CliOverrides {
        start_url: cli.start_url.clone(),
        max_pages: cli.max_pages,
    };
    let config = apply_overrides(file_config, &overrides)?;
    Ok((config, config_hash))
}

//! Kliping main entry point
//!
//! Command-line interface for the two harvest stages: `crawl` discovers
//! article URLs across a date range, `scrape` resolves collected URLs into
//! CSV records.

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use kliping::config::load_config_with_hash;
use kliping::state::CrawlWindow;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Kliping: a date-indexed news article harvester
#[derive(Parser, Debug)]
#[command(name = "kliping")]
#[command(version)]
#[command(about = "Harvest news articles from a date-indexed listing", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Discover article URLs across a date range and append them to the link file
    Crawl {
        /// First day of the range (YYYY-MM-DD)
        #[arg(long, requires = "end_date", conflicts_with = "months_back")]
        start_date: Option<NaiveDate>,

        /// Last day of the range (YYYY-MM-DD)
        #[arg(long, requires = "start_date", conflicts_with = "months_back")]
        end_date: Option<NaiveDate>,

        /// Crawl the last N months, day by day, ending today
        #[arg(long)]
        months_back: Option<u32>,
    },

    /// Fetch every collected URL and write article records as CSV
    Scrape {
        /// URL list to read instead of the configured links file
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    match cli.command {
        Command::Crawl {
            start_date,
            end_date,
            months_back,
        } => {
            let window = resolve_window(start_date, end_date, months_back)?;
            tracing::info!("Starting crawl for {} ({} days)", window, window.day_count());

            let count = kliping::crawler::harvest_links(&config, window).await?;
            tracing::info!("Finished crawling. Total articles found: {}", count);
        }
        Command::Scrape { input } => {
            tracing::info!("Starting article scraping process");

            let count = kliping::scrape::harvest_records(&config, input.as_deref()).await?;
            tracing::info!("Finished scraping. Total records written: {}", count);
        }
    }

    Ok(())
}

/// Resolves the crawl window from the mutually exclusive date arguments
///
/// With no arguments the window covers today only; `--months-back N`
/// reaches back `N * 30` days from today.
fn resolve_window(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    months_back: Option<u32>,
) -> anyhow::Result<CrawlWindow> {
    match (start_date, end_date, months_back) {
        (Some(start), Some(end), None) => {
            anyhow::ensure!(
                start <= end,
                "start date {} is after end date {}",
                start,
                end
            );
            Ok(CrawlWindow::new(start, end))
        }
        (None, None, Some(months)) => {
            let today = chrono::Local::now().date_naive();
            let start = today - chrono::Duration::days(i64::from(months) * 30);
            Ok(CrawlWindow::new(start, today))
        }
        (None, None, None) => Ok(CrawlWindow::single_day(chrono::Local::now().date_naive())),
        _ => anyhow::bail!("provide either --start-date and --end-date, or --months-back"),
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("kliping=info,warn"),
            1 => EnvFilter::new("kliping=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

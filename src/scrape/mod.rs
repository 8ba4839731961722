//! Article-scrape stage: resolve collected URLs into tabular records
//!
//! This module contains the second half of the pipeline:
//! - The bounded-attempt, fixed-backoff retrying fetcher
//! - Article field extraction
//! - The concurrent per-URL scheduler

mod article;
mod retry;
mod scheduler;

pub use article::{extract_fields, ArticleFields, ArticleRecord};
pub use retry::{fetch_with_retry, RetryPolicy, RetryingFetcher};
pub use scheduler::scrape_all;

use crate::config::Config;
use crate::crawler::build_http_client;
use crate::output::links::read_links;
use crate::output::records::write_records;
use crate::Result;
use std::path::Path;

/// Runs the complete scrape stage
///
/// Reads the URL list, resolves every URL concurrently, and writes one CSV
/// row per URL. A failure to write the record file is logged and does not
/// discard the in-memory result.
///
/// # Arguments
///
/// * `config` - The harvester configuration
/// * `input` - URL list to read instead of the configured links file
///
/// # Returns
///
/// The number of records produced (equal to the number of input URLs).
pub async fn harvest_records(config: &Config, input: Option<&Path>) -> Result<usize> {
    let links_path = input.unwrap_or_else(|| Path::new(&config.output.links_path));

    // A missing or unreadable URL list ends the run with a count of zero
    // rather than a hard failure
    let urls = match read_links(links_path).await {
        Ok(urls) => urls,
        Err(e) => {
            tracing::error!("Error reading file {}: {}", links_path.display(), e);
            return Ok(0);
        }
    };
    if urls.is_empty() {
        tracing::warn!("No URLs found in {}", links_path.display());
        return Ok(0);
    }
    tracing::info!("Found {} URLs in {}", urls.len(), links_path.display());

    let client = build_http_client(config.scraper.request_timeout())?;
    let fetcher = RetryingFetcher::new(client, RetryPolicy::from_config(&config.scraper));

    let records = scrape_all(&fetcher, urls).await;

    let scraped = records.iter().filter(|r| !r.is_empty()).count();
    tracing::info!(
        "Scraped {} articles ({} with content)",
        records.len(),
        scraped
    );

    let path = Path::new(&config.output.records_path);
    if let Err(e) = write_records(path, &records) {
        tracing::error!("Failed to save records to {}: {}", path.display(), e);
    }

    Ok(records.len())
}

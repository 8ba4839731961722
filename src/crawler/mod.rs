//! Index-crawl stage: discover article URLs per calendar day
//!
//! This module contains the first half of the pipeline:
//! - HTTP fetch primitives with failure classification
//! - Listing-page parsing (article anchors, next-page control)
//! - The per-window iterative pagination loop
//! - The per-day fan-out and dedup merge

mod aggregator;
mod fetcher;
mod index;
mod listing;

pub use aggregator::collect_links;
pub use fetcher::{build_http_client, fetch_page, FetchOutcome};
pub use index::{crawl_window, ArticleLink};
pub use listing::{parse_listing, ListingPage};

use crate::config::Config;
use crate::output::links::append_links;
use crate::state::CrawlWindow;
use crate::Result;
use std::path::Path;
use url::Url;

/// Runs the complete crawl stage for a date window
///
/// Discovers article URLs across the window and appends them to the
/// configured link file. A failure to write the file is logged and does not
/// discard the in-memory result.
///
/// # Arguments
///
/// * `config` - The harvester configuration
/// * `window` - The date range to cover
///
/// # Returns
///
/// The number of unique article URLs discovered.
pub async fn harvest_links(config: &Config, window: CrawlWindow) -> Result<usize> {
    let origin = Url::parse(&config.site.origin)?;
    let client = build_http_client(config.crawler.fetch_timeout())?;

    let links = collect_links(&client, &origin, &config.crawler, window).await;

    if links.is_empty() {
        tracing::warn!("No articles found for {}", window);
        return Ok(0);
    }

    let path = Path::new(&config.output.links_path);
    if let Err(e) = append_links(path, &links).await {
        tracing::error!("Failed to save URLs to {}: {}", path.display(), e);
    }

    Ok(links.len())
}

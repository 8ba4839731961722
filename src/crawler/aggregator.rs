//! Fan-out of per-day traversals and merge of their results
//!
//! Expands a date range into single-day windows, crawls each under the
//! bounded worker pool, and merges the per-day link sets into one
//! deduplicated sequence. A failed day is logged and excluded; it never
//! aborts its siblings.

use crate::config::CrawlerConfig;
use crate::crawler::index::{crawl_window, ArticleLink};
use crate::dispatch::run_bounded;
use crate::state::CrawlWindow;
use reqwest::Client;
use std::collections::HashSet;
use url::Url;

/// Crawls every day of the window concurrently and merges the results
///
/// Completion order across days is not guaranteed; the merge is an
/// order-independent union keyed by URL.
///
/// # Arguments
///
/// * `client` - HTTP client built with the crawl-stage timeout
/// * `origin` - The configured site origin
/// * `config` - Crawl behavior settings, including the worker limit
/// * `window` - The full date range to cover
pub async fn collect_links(
    client: &Client,
    origin: &Url,
    config: &CrawlerConfig,
    window: CrawlWindow,
) -> Vec<ArticleLink> {
    let tasks: Vec<(String, _)> = window
        .days()
        .map(|day| {
            let client = client.clone();
            let origin = origin.clone();
            let config = config.clone();
            let task = async move { crawl_window(&client, &origin, &config, day).await };
            (day.to_string(), task)
        })
        .collect();

    tracing::info!(
        "Crawling {} days from {} to {} with {} workers",
        tasks.len(),
        window.start,
        window.end,
        config.workers
    );

    let results = run_bounded(config.workers as usize, tasks).await;

    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    let mut total = 0usize;

    for (day, result) in results {
        match result {
            Some(found) => {
                total += found.len();
                tracing::info!(
                    "Found {} articles for {}. Total articles so far: {}",
                    found.len(),
                    day,
                    total
                );
                for link in found {
                    if seen.insert(link.url.clone()) {
                        merged.push(link);
                    }
                }
            }
            None => {
                tracing::error!("Error processing date {}; excluding it from the merge", day);
            }
        }
    }

    merged
}

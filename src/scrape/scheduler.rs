//! Concurrent dispatch of fetch-and-parse tasks
//!
//! Every URL gets its own task and all tasks are dispatched at once; the
//! shared dispatcher's limit is set to the batch size, so nothing queues
//! behind anything else. Results arrive in completion order.

use crate::dispatch::run_bounded;
use crate::scrape::article::{extract_fields, ArticleRecord};
use crate::scrape::retry::RetryingFetcher;

/// Fetches and parses every URL concurrently
///
/// Length-preserving: exactly one record per input URL. A failed fetch, an
/// exhausted retry budget, or a panicked task degrades to an all-null
/// record carrying the URL; siblings are unaffected.
///
/// # Arguments
///
/// * `fetcher` - The retrying fetcher shared by all tasks
/// * `urls` - Article URLs to resolve
pub async fn scrape_all(fetcher: &RetryingFetcher, urls: Vec<String>) -> Vec<ArticleRecord> {
    let limit = urls.len().max(1);

    let tasks: Vec<(String, _)> = urls
        .into_iter()
        .map(|url| {
            let fetcher = fetcher.clone();
            let label = url.clone();
            let task = async move {
                tracing::info!("Scraping URL: {}", url);
                match fetcher.fetch(&url).await {
                    Some(body) => {
                        let record = ArticleRecord::from_fields(&url, extract_fields(&body));
                        tracing::info!("Successfully scraped URL: {}", url);
                        record
                    }
                    None => {
                        tracing::warn!("No content for URL: {}", url);
                        ArticleRecord::empty(&url)
                    }
                }
            };
            (label, task)
        })
        .collect();

    run_bounded(limit, tasks)
        .await
        .into_iter()
        .map(|(url, result)| result.unwrap_or_else(|| ArticleRecord::empty(url)))
        .collect()
}

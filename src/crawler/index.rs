//! Index traversal for one crawl window
//!
//! Walks the paginated listing for a date window with an explicit cursor
//! loop. Termination is reached on: fetch failure, an empty page, a missing
//! or non-advancing next-page control, or the page budget.

use crate::config::CrawlerConfig;
use crate::crawler::fetcher::{fetch_page, FetchOutcome};
use crate::crawler::listing::parse_listing;
use crate::state::{CrawlWindow, PageCursor};
use reqwest::Client;
use std::collections::HashSet;
use url::Url;

/// An article detail-page URL discovered on an index page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleLink {
    pub url: String,
}

/// Builds the listing URL for one page of a window
fn listing_url(origin: &Url, window: &CrawlWindow, page_num: u32) -> String {
    format!(
        "{}/indeks?page={}&category=date&start_date={}&end_date={}",
        origin.as_str().trim_end_matches('/'),
        page_num,
        window.start,
        window.end
    )
}

/// Crawls every listing page of one window and returns its article links
///
/// A fetch failure mid-traversal ends the loop but keeps the links already
/// collected (partial-success policy). Links are deduplicated within the
/// window while preserving discovery order. A fixed delay separates
/// consecutive page fetches.
///
/// # Arguments
///
/// * `client` - HTTP client built with the crawl-stage timeout
/// * `origin` - The configured site origin
/// * `config` - Crawl behavior settings (page budget, inter-page delay)
/// * `window` - The date window to traverse
pub async fn crawl_window(
    client: &Client,
    origin: &Url,
    config: &CrawlerConfig,
    window: CrawlWindow,
) -> Vec<ArticleLink> {
    let mut cursor = PageCursor::new(config.max_pages);
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    loop {
        let url = listing_url(origin, &window, cursor.page_num());
        tracing::info!("Crawling page {} for {}", cursor.page_num(), window);

        let body = match fetch_page(client, &url).await {
            FetchOutcome::Success { body } => body,
            FetchOutcome::Status { code } => {
                tracing::error!(
                    "Failed to fetch page {} for {}: HTTP {}",
                    cursor.page_num(),
                    window,
                    code
                );
                break;
            }
            FetchOutcome::Network { error } => {
                tracing::error!(
                    "Failed to fetch page {} for {}: {}",
                    cursor.page_num(),
                    window,
                    error
                );
                break;
            }
        };

        let page = parse_listing(&body, origin);

        if page.links.is_empty() {
            tracing::info!("No articles found on page {} for {}", cursor.page_num(), window);
            break;
        }

        for url in page.links {
            if seen.insert(url.clone()) {
                tracing::debug!("Found article URL: {}", url);
                links.push(ArticleLink { url });
            }
        }

        match page.next_page {
            Some(next) if cursor.advance(next) => {
                tokio::time::sleep(config.page_delay()).await;
            }
            _ => break,
        }
    }

    tracing::info!("Found {} articles for {}", links.len(), window);
    links
}

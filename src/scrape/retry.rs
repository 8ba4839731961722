//! Retry-with-backoff resolution of article URLs
//!
//! The policy preserves the central fetch-stage contract: a non-success
//! HTTP status is definitive and never retried, while network-level
//! failures (timeouts included) are retried with a fixed backoff until the
//! attempt budget runs out. Exhaustion degrades to `None` rather than an
//! error so one bad URL never aborts a batch.

use crate::config::ScraperConfig;
use crate::crawler::{fetch_page, FetchOutcome};
use crate::state::FetchAttempt;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// Bounded-attempt, fixed-backoff retry policy
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total fetch attempts per URL
    pub retries: u32,

    /// Fixed delay between attempts
    pub backoff: Duration,
}

impl RetryPolicy {
    /// Creates a policy with the given attempt budget and backoff
    pub fn new(retries: u32, backoff: Duration) -> Self {
        Self { retries, backoff }
    }

    /// Builds the policy from the scraper configuration
    pub fn from_config(config: &ScraperConfig) -> Self {
        Self::new(config.retries, config.backoff())
    }
}

/// Drives the retry state machine with an injected per-attempt fetch
///
/// `attempt_fn` receives the 0-based attempt index and resolves to the
/// classified outcome of one GET. Keeping the transport injected makes the
/// policy testable without network access.
///
/// # Arguments
///
/// * `policy` - Attempt budget and backoff duration
/// * `url` - The URL being resolved, used in diagnostics only
/// * `attempt_fn` - Performs one fetch attempt
///
/// # Returns
///
/// * `Some(body)` - A successful response body
/// * `None` - A definitive HTTP status or an exhausted attempt budget
pub async fn fetch_with_retry<F, Fut>(
    policy: &RetryPolicy,
    url: &str,
    mut attempt_fn: F,
) -> Option<String>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = FetchOutcome>,
{
    let mut attempt = FetchAttempt::new(policy.retries);

    loop {
        match attempt_fn(attempt.index()).await {
            FetchOutcome::Success { body } => {
                tracing::debug!("Fetched {} on attempt {}", url, attempt.attempts_made());
                return Some(body);
            }
            FetchOutcome::Status { code } => {
                tracing::warn!("Giving up on {}: HTTP {}", url, code);
                return None;
            }
            FetchOutcome::Network { error } => {
                if !attempt.record_failure(error) {
                    tracing::warn!(
                        "Exhausted {} attempts for {}: {}",
                        attempt.index(),
                        url,
                        attempt.last_error().unwrap_or("unknown error")
                    );
                    return None;
                }

                tracing::info!(
                    "Retrying {} in {:?} (attempt {} of {})",
                    url,
                    policy.backoff,
                    attempt.attempts_made(),
                    policy.retries
                );
                tokio::time::sleep(policy.backoff).await;
            }
        }
    }
}

/// Binds the retry policy to a real HTTP client
#[derive(Debug, Clone)]
pub struct RetryingFetcher {
    client: Client,
    policy: RetryPolicy,
}

impl RetryingFetcher {
    /// Creates a fetcher from a client and a policy
    pub fn new(client: Client, policy: RetryPolicy) -> Self {
        Self { client, policy }
    }

    /// Resolves one URL to its body, or `None` after a definitive failure
    pub async fn fetch(&self, url: &str) -> Option<String> {
        fetch_with_retry(&self.policy, url, |_| fetch_page(&self.client, url)).await
    }
}

use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for the harvester
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub scraper: ScraperConfig,
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Site origin every discovered article URL must start with
    /// (e.g., "https://www.tempo.co")
    pub origin: String,
}

/// Index-crawl behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Upper bound on index pages visited per window
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: u32,

    /// Number of concurrent per-day crawl workers
    #[serde(default = "default_workers")]
    pub workers: u32,

    /// Delay between consecutive index page fetches (milliseconds)
    #[serde(rename = "page-delay-ms", default = "default_page_delay_ms")]
    pub page_delay_ms: u64,

    /// Total timeout for one index page fetch (seconds)
    #[serde(rename = "fetch-timeout-secs", default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

/// Article-scrape behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    /// Total fetch attempts per article URL
    #[serde(default = "default_retries")]
    pub retries: u32,

    /// Fixed delay between retry attempts (milliseconds)
    #[serde(rename = "backoff-ms", default = "default_backoff_ms")]
    pub backoff_ms: u64,

    /// Total timeout for one article fetch attempt (seconds)
    #[serde(
        rename = "request-timeout-secs",
        default = "default_request_timeout_secs"
    )]
    pub request_timeout_secs: u64,
}

/// Output artifact configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the append-only article URL list
    #[serde(rename = "links-path")]
    pub links_path: String,

    /// Path to the CSV record file
    #[serde(rename = "records-path")]
    pub records_path: String,
}

impl CrawlerConfig {
    /// Delay applied between consecutive index page fetches
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    /// Total timeout for one index page fetch
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl ScraperConfig {
    /// Fixed delay between retry attempts
    pub fn backoff(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }

    /// Total timeout for one article fetch attempt
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: default_max_pages(),
            workers: default_workers(),
            page_delay_ms: default_page_delay_ms(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            retries: default_retries(),
            backoff_ms: default_backoff_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_max_pages() -> u32 {
    100
}

fn default_workers() -> u32 {
    5
}

fn default_page_delay_ms() -> u64 {
    1000
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

fn default_retries() -> u32 {
    3
}

fn default_backoff_ms() -> u64 {
    5000
}

fn default_request_timeout_secs() -> u64 {
    15
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crawler_defaults() {
        let config = CrawlerConfig::default();
        assert_eq!(config.max_pages, 100);
        assert_eq!(config.workers, 5);
        assert_eq!(config.page_delay(), Duration::from_secs(1));
        assert_eq!(config.fetch_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_scraper_defaults() {
        let config = ScraperConfig::default();
        assert_eq!(config.retries, 3);
        assert_eq!(config.backoff(), Duration::from_secs(5));
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
    }
}

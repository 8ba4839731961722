//! HTTP fetch primitives shared by both pipeline stages
//!
//! This module builds the HTTP clients and performs single GET requests,
//! classifying every failure into one of two classes:
//! - a non-success HTTP status, which is definitive and never retried
//! - a network-level error (timeout, refused connection, broken body read),
//!   which is transient and eligible for retry

use reqwest::Client;
use std::time::Duration;

/// Outcome of a single GET request
#[derive(Debug)]
pub enum FetchOutcome {
    /// Successful response with its body
    Success {
        /// Page body content
        body: String,
    },

    /// Definitive non-success HTTP status (e.g. 404, 403, 500)
    Status {
        /// The HTTP status code
        code: u16,
    },

    /// Network-level failure (connection refused, timeout, etc.)
    Network {
        /// Error description
        error: String,
    },
}

/// Builds an HTTP client with the given total request timeout
///
/// # Arguments
///
/// * `timeout` - Total timeout applied to each request issued by the client
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    let user_agent = format!("kliping/{}", env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Performs one GET request and classifies the result
///
/// | Condition | Outcome |
/// |-----------|---------|
/// | 2xx with readable body | `Success` |
/// | Any non-success status | `Status` (terminal) |
/// | Timeout | `Network` (retryable) |
/// | Connection refused | `Network` (retryable) |
/// | Body read failure | `Network` (retryable) |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &str) -> FetchOutcome {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();

            if !status.is_success() {
                return FetchOutcome::Status {
                    code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchOutcome::Success { body },
                Err(e) => FetchOutcome::Network {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => {
            let error = if e.is_timeout() {
                "request timeout".to_string()
            } else if e.is_connect() {
                "connection refused".to_string()
            } else {
                e.to_string()
            };

            FetchOutcome::Network { error }
        }
    }
}

//! Shared HTTP client and retrying page fetch.
//!
//! Provides a configured [`reqwest::Client`] with browser-like headers and
//! a fixed per-run User-Agent, plus [`fetch_page`] which retries a bounded
//! number of times with exponential backoff on transient server-error
//! statuses before surfacing a per-URL failure.

use crate::config::{FinderConfig, RetryPolicy};
use crate::error::FinderError;
use rand::seq::SliceRandom;
use std::time::Duration;

/// Realistic browser User-Agent strings; one is picked per run.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.10 Safari/605.1.1",
];

/// Build a [`reqwest::Client`] configured for fetching search pages and
/// candidate sites.
///
/// The client has:
/// - Cookie store enabled (for consent pages on search providers)
/// - Per-request timeout from config
/// - A fixed User-Agent for the whole run (custom if configured, otherwise
///   one of the built-in browser strings)
/// - Brotli and gzip decompression
///
/// # Errors
///
/// Returns [`FinderError::Http`] if the client cannot be constructed.
pub fn build_client(config: &FinderConfig) -> Result<reqwest::Client, FinderError> {
    let ua = match config.user_agent {
        Some(ref custom) => custom.clone(),
        None => random_user_agent().to_owned(),
    };

    reqwest::Client::builder()
        .cookie_store(true)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| FinderError::Http(format!("failed to build HTTP client: {e}")))
}

/// Select a random User-Agent string from the rotation list.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        .unwrap_or(USER_AGENTS[0])
}

/// Fetch a page body, retrying transient server errors.
///
/// Statuses in `retry.retry_statuses` are retried up to
/// `retry.max_attempts` total attempts with exponential backoff starting
/// at `retry.backoff_base_ms`. Any other non-success status, and any
/// transport error (including timeouts), fails immediately.
///
/// # Errors
///
/// Returns [`FinderError::Http`] when the URL cannot be fetched within the
/// retry budget.
pub async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
    retry: &RetryPolicy,
) -> Result<String, FinderError> {
    let mut attempt: u32 = 0;
    loop {
        attempt += 1;
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| FinderError::Http(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            return response
                .text()
                .await
                .map_err(|e| FinderError::Http(format!("reading body from {url} failed: {e}")));
        }

        if !retry.retry_statuses.contains(&status.as_u16()) || attempt >= retry.max_attempts {
            return Err(FinderError::Http(format!("{url} returned HTTP {status}")));
        }

        let backoff = retry
            .backoff_base_ms
            .saturating_mul(2u64.saturating_pow(attempt - 1));
        tracing::trace!(url, %status, attempt, backoff_ms = backoff, "transient status, backing off");
        tokio::time::sleep(Duration::from_millis(backoff)).await;
    }
}

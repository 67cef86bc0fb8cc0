//! Finder configuration with sensible defaults.
//!
//! [`FinderConfig`] controls search depth, report size, timeouts, retry
//! behaviour, and request pacing. The defaults match the tool's intended
//! interactive use: eight queries, fifty results each, top five reported.

use crate::error::FinderError;

/// Bounded-retry policy for page fetches.
///
/// Retries apply only to the listed transient server-error statuses;
/// anything else (including network errors and timeouts) surfaces as an
/// ordinary per-URL failure on the first attempt.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts per URL, including the first.
    pub max_attempts: u32,
    /// Base backoff delay in milliseconds; doubles per attempt.
    pub backoff_base_ms: u64,
    /// HTTP statuses considered transient.
    pub retry_statuses: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_base_ms: 300,
            retry_statuses: vec![500, 502, 503, 504],
        }
    }
}

/// Configuration for one discovery-and-ranking run.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Number of top agent/team pages to report.
    pub top_count: usize,
    /// Search results to retrieve per query. Also determines the
    /// missing-result penalty via [`FinderConfig::penalty`].
    pub results_per_query: usize,
    /// Region code passed to the search provider.
    pub region: String,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Random delay range in milliseconds `(min, max)` between successive
    /// search-provider page requests. Spreads requests over time to avoid
    /// rate limiting.
    pub request_delay_ms: (u64, u64),
    /// Custom User-Agent string. If `None`, one is picked per run from a
    /// built-in list of realistic browser User-Agents.
    pub user_agent: Option<String>,
    /// Retry behaviour for page fetches.
    pub retry: RetryPolicy,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            top_count: 5,
            results_per_query: 50,
            region: "us".into(),
            timeout_seconds: 10,
            request_delay_ms: (500, 2000),
            user_agent: None,
            retry: RetryPolicy::default(),
        }
    }
}

impl FinderConfig {
    /// The score substituted for queries where a name did not appear.
    ///
    /// One greater than the deepest requested result, so absence always
    /// scores worse than any real appearance.
    pub fn penalty(&self) -> usize {
        self.results_per_query + 1
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `top_count` must be greater than 0
    /// - `results_per_query` must be greater than 0
    /// - `timeout_seconds` must be greater than 0
    /// - `request_delay_ms.0` must be <= `request_delay_ms.1`
    /// - `retry.max_attempts` must be greater than 0
    pub fn validate(&self) -> Result<(), FinderError> {
        if self.top_count == 0 {
            return Err(FinderError::Config("top_count must be greater than 0".into()));
        }
        if self.results_per_query == 0 {
            return Err(FinderError::Config(
                "results_per_query must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(FinderError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.request_delay_ms.0 > self.request_delay_ms.1 {
            return Err(FinderError::Config(
                "request_delay_ms min must be <= max".into(),
            ));
        }
        if self.retry.max_attempts == 0 {
            return Err(FinderError::Config(
                "retry.max_attempts must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

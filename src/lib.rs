//! # top-agents
//!
//! Discovers and ranks candidate "best real-estate agent/team" pages for a
//! geographic area. Several related phrasings of the same question go to a
//! search provider; each result page is fetched and classified; per-query
//! rankings merge into a single penalty-adjusted aggregate score.
//!
//! ## Design
//!
//! - Queries fan out concurrently; within a query, URLs are fetched
//!   sequentially in search-rank order
//! - A curated deny-list drops aggregator sites, national brokerages,
//!   social platforms, and map links before any fetch happens
//! - Pages classify as agent/team pages by their extracted title
//! - Candidates deduplicate by case-folded name; absence from a query
//!   costs a fixed penalty larger than any achievable rank
//! - Every failure is contained per URL or per query; a run always
//!   produces a (possibly empty) ranked list
//!
//! The search provider is consumed through [`SearchProvider`], so the
//! shipped Google scraper and test doubles are interchangeable.

pub mod cache;
pub mod classify;
pub mod config;
pub mod error;
pub mod filter;
pub mod http;
pub mod pipeline;
pub mod provider;
pub mod providers;
pub mod queries;
pub mod report;
pub mod types;

pub use config::{FinderConfig, RetryPolicy};
pub use error::{FinderError, Result};
pub use provider::SearchProvider;
pub use providers::GoogleProvider;
pub use types::{AggregatedEntry, CandidateEntry};

use cache::PageCache;
use pipeline::aggregate::aggregate_entries;
use pipeline::fetcher::fetch_agents_for_query;

/// Discover and rank agent/team pages for an area using the shipped
/// Google provider.
///
/// Builds the query set from `area`, drives the per-query pipeline over
/// every phrasing, and aggregates the results into one sorted list.
/// Callers truncate to their preferred top-N for display.
///
/// # Errors
///
/// Returns [`FinderError::Config`] if `config` is invalid and
/// [`FinderError::Http`] if the HTTP client cannot be constructed.
/// Provider and per-URL failures degrade individual queries instead of
/// failing the run.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> top_agents::Result<()> {
/// let config = top_agents::FinderConfig::default();
/// let ranked = top_agents::find_top_agents("pittsburgh pa", &config).await?;
/// for entry in ranked.iter().take(config.top_count) {
///     println!("{}: {}", entry.name, entry.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn find_top_agents(area: &str, config: &FinderConfig) -> Result<Vec<AggregatedEntry>> {
    config.validate()?;
    let provider = GoogleProvider::new(config)?;
    find_top_agents_with_provider(&provider, area, config).await
}

/// Same as [`find_top_agents`], but over a caller-supplied provider.
///
/// # Errors
///
/// Same as [`find_top_agents`].
pub async fn find_top_agents_with_provider<P: SearchProvider>(
    provider: &P,
    area: &str,
    config: &FinderConfig,
) -> Result<Vec<AggregatedEntry>> {
    config.validate()?;

    let queries = queries::build_queries(area);
    let client = http::build_client(config)?;
    let cache = PageCache::new();

    let futures: Vec<_> = queries
        .iter()
        .map(|query| fetch_agents_for_query(provider, &client, &cache, query, config))
        .collect();
    let per_query = futures::future::join_all(futures).await;

    let candidates: usize = per_query.iter().map(|map| map.len()).sum();
    tracing::debug!(
        queries = queries.len(),
        candidates,
        penalty = config.penalty(),
        "aggregating"
    );

    Ok(aggregate_entries(&per_query, config.penalty()))
}

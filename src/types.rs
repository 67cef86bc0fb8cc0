//! Core types for candidate agent pages and aggregated rankings.

use serde::{Deserialize, Serialize};

/// One classified agent/team page discovered for a single query.
///
/// `rank` is the 1-based position of the page's URL in that query's raw
/// search result sequence. Positions freed up by filtered or failed URLs
/// are not renumbered, so rank always means "search position".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateEntry {
    /// Display name extracted from the page title.
    pub name: String,
    /// The URL the page was fetched from.
    pub url: String,
    /// Best (minimum) 1-based search position seen for this name in the query.
    pub rank: usize,
}

/// A candidate's combined standing across all queries.
///
/// Built once per run by the aggregator and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedEntry {
    /// Display name from the best-ranked appearance.
    pub name: String,
    /// URL from the best-ranked appearance.
    pub url: String,
    /// Sum over queries of the rank where present, or the penalty where absent.
    /// Lower is better.
    pub total_score: usize,
    /// Minimum per-query contribution (never a penalty unless absent everywhere).
    pub best_rank: usize,
    /// Maximum per-query contribution; equals the penalty if any query missed.
    pub worst_rank: usize,
    /// Number of queries in which the name actually appeared.
    pub appearance_count: usize,
}

/// Normalize a candidate display name into the dedup key used across
/// and within queries.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

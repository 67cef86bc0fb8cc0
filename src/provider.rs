//! Trait definition for pluggable search providers.
//!
//! The pipeline consumes search results through [`SearchProvider`] so that
//! the real scraping implementation and test doubles are interchangeable.

use crate::error::FinderError;

/// A source of ordered search results for a query string.
///
/// Implementors return URLs ordered by relevance; the 1-based position in
/// the returned sequence becomes the candidate's rank for that query.
/// A provider failure degrades the affected query to zero results; it
/// never aborts the run.
///
/// All implementations must be `Send + Sync` so queries can fan out
/// concurrently.
pub trait SearchProvider: Send + Sync {
    /// Run a search and return up to `num_results` result URLs in
    /// relevance order.
    ///
    /// # Arguments
    ///
    /// * `query` — The raw query string (encoding is the implementation's
    ///   concern).
    /// * `region` — Region code biasing the result set.
    /// * `num_results` — Upper bound on returned URLs.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError`] if the provider cannot produce a result
    /// sequence (network failure, blocked request, unparsable response).
    fn search(
        &self,
        query: &str,
        region: &str,
        num_results: usize,
    ) -> impl std::future::Future<Output = Result<Vec<String>, FinderError>> + Send;
}

//! In-memory cache of fetched page bodies, keyed by URL.
//!
//! The query phrasings overlap heavily, so the same page routinely
//! surfaces under several queries in one run. Caching bodies makes each
//! URL cost at most one fetch. Failures are never cached, so a URL that
//! failed under one query can still succeed under a later one. Uses
//! [`moka`] for async-friendly caching with TTL and automatic eviction.

use std::time::Duration;

use moka::future::Cache;

/// Maximum number of cached page bodies.
const MAX_CACHE_ENTRIES: u64 = 512;

/// How long a cached body stays valid. Generous relative to run length;
/// the cache is dropped with the run anyway.
const CACHE_TTL_SECONDS: u64 = 600;

/// Per-run page-body cache.
///
/// Cheap to clone; clones share the underlying cache.
#[derive(Clone)]
pub struct PageCache {
    inner: Cache<String, String>,
}

impl PageCache {
    /// Create an empty cache with the built-in capacity and TTL.
    pub fn new() -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(MAX_CACHE_ENTRIES)
                .time_to_live(Duration::from_secs(CACHE_TTL_SECONDS))
                .build(),
        }
    }

    /// Look up a cached body for `url`.
    pub async fn get(&self, url: &str) -> Option<String> {
        self.inner.get(url).await
    }

    /// Store a fetched body.
    pub async fn insert(&self, url: String, body: String) {
        self.inner.insert(url, body).await;
    }
}

impl Default for PageCache {
    fn default() -> Self {
        Self::new()
    }
}

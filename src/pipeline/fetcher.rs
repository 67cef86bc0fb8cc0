//! Per-query fetch-and-classify pipeline.
//!
//! For one query: obtain ranked result URLs, drop banned domains, fetch
//! the survivors, classify each page, and build a map of normalized name
//! to best-ranked [`CandidateEntry`]. Every failure is contained at the
//! URL or query it occurred in; this function always returns a map.

use std::collections::HashMap;

use crate::cache::PageCache;
use crate::classify;
use crate::config::FinderConfig;
use crate::filter;
use crate::http;
use crate::provider::SearchProvider;
use crate::types::{normalize_name, CandidateEntry};

/// Fetch, filter, and classify one query's results.
///
/// Ranks are assigned by 1-based enumeration over the raw search sequence
/// before any filtering, so skipped URLs leave gaps and rank keeps meaning
/// "search position". A provider failure degrades the query to an empty
/// map; per-URL fetch failures and classification misses skip that URL
/// only.
pub async fn fetch_agents_for_query<P: SearchProvider>(
    provider: &P,
    client: &reqwest::Client,
    cache: &PageCache,
    query: &str,
    config: &FinderConfig,
) -> HashMap<String, CandidateEntry> {
    tracing::info!(query, "searching");

    let urls = match provider
        .search(query, &config.region, config.results_per_query)
        .await
    {
        Ok(urls) => urls,
        Err(err) => {
            tracing::warn!(query, error = %err, "search failed, treating query as empty");
            Vec::new()
        }
    };

    let mut entries: HashMap<String, CandidateEntry> = HashMap::new();

    for (position, url) in urls.iter().enumerate() {
        let rank = position + 1;
        if filter::is_banned(url) {
            continue;
        }

        let body = match cache.get(url).await {
            Some(cached) => cached,
            None => match http::fetch_page(client, url, &config.retry).await {
                Ok(body) => {
                    cache.insert(url.clone(), body.clone()).await;
                    body
                }
                Err(err) => {
                    tracing::debug!(url, error = %err, "failed to fetch page");
                    continue;
                }
            },
        };

        let Some(title) = classify::extract_meta_title(&body) else {
            continue;
        };
        if !classify::looks_like_agent(&title) {
            continue;
        }

        upsert_candidate(&mut entries, &title, url, rank);
    }

    tracing::debug!(query, candidates = entries.len(), "query complete");
    entries
}

/// Record a classified page, deduplicating by normalized name.
///
/// A recurring name keeps the minimum rank seen but retains the
/// first-seen name/url pair.
pub(crate) fn upsert_candidate(
    entries: &mut HashMap<String, CandidateEntry>,
    title: &str,
    url: &str,
    rank: usize,
) {
    entries
        .entry(normalize_name(title))
        .and_modify(|existing| existing.rank = existing.rank.min(rank))
        .or_insert_with(|| {
            tracing::debug!(title, rank, "found agent");
            CandidateEntry {
                name: title.to_owned(),
                url: url.to_owned(),
                rank,
            }
        });
}

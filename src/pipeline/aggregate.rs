//! Aggregation of per-query candidate maps into one global ranking.
//!
//! A pure, one-shot batch transformation: union the normalized-name keys,
//! build a penalty-substituted rank vector per key, derive the score
//! statistics, and sort ascending by total score. Deterministic for
//! deterministic inputs.

use std::collections::{HashMap, HashSet};

use crate::types::{AggregatedEntry, CandidateEntry};

/// Combine per-query candidate maps into a sorted aggregate list.
///
/// For each name, `penalty` stands in for every query that missed it, so
/// absence always scores worse than any real appearance. The
/// representative name/url come from the appearance with the globally
/// smallest rank. Ties on `total_score` break by `best_rank`, then name,
/// making the ordering total and stable across runs.
pub fn aggregate_entries(
    query_results: &[HashMap<String, CandidateEntry>],
    penalty: usize,
) -> Vec<AggregatedEntry> {
    let mut all_keys: HashSet<&String> = HashSet::new();
    for result in query_results {
        all_keys.extend(result.keys());
    }

    let mut aggregated: Vec<AggregatedEntry> = Vec::with_capacity(all_keys.len());

    for key in all_keys {
        let mut total = 0usize;
        let mut best = usize::MAX;
        let mut worst = 0usize;
        let mut appearances = 0usize;
        let mut representative: Option<&CandidateEntry> = None;

        for result in query_results {
            let rank = match result.get(key) {
                Some(entry) => {
                    appearances += 1;
                    if representative.map_or(true, |rep| entry.rank < rep.rank) {
                        representative = Some(entry);
                    }
                    entry.rank
                }
                None => penalty,
            };
            total += rank;
            best = best.min(rank);
            worst = worst.max(rank);
        }

        // Every key came from at least one map, so a representative exists.
        let Some(rep) = representative else {
            continue;
        };

        aggregated.push(AggregatedEntry {
            name: rep.name.clone(),
            url: rep.url.clone(),
            total_score: total,
            best_rank: best,
            worst_rank: worst,
            appearance_count: appearances,
        });
    }

    aggregated.sort_by(|a, b| {
        a.total_score
            .cmp(&b.total_score)
            .then_with(|| a.best_rank.cmp(&b.best_rank))
            .then_with(|| a.name.cmp(&b.name))
    });

    aggregated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::normalize_name;

    fn entry(name: &str, url: &str, rank: usize) -> CandidateEntry {
        CandidateEntry {
            name: name.to_owned(),
            url: url.to_owned(),
            rank,
        }
    }

    fn query_map(entries: &[(&str, &str, usize)]) -> HashMap<String, CandidateEntry> {
        entries
            .iter()
            .map(|(name, url, rank)| (normalize_name(name), entry(name, url, *rank)))
            .collect()
    }

    #[test]
    fn penalty_substituted_for_missing_queries() {
        let results = vec![
            query_map(&[("Jane Doe Team", "https://jane.com", 3)]),
            query_map(&[]),
            query_map(&[("Jane Doe Team", "https://jane.com/alt", 7)]),
        ];

        let aggregated = aggregate_entries(&results, 51);
        assert_eq!(aggregated.len(), 1);

        let jane = &aggregated[0];
        assert_eq!(jane.total_score, 3 + 51 + 7);
        assert_eq!(jane.best_rank, 3);
        assert_eq!(jane.worst_rank, 51);
        assert_eq!(jane.appearance_count, 2);
    }

    #[test]
    fn representative_comes_from_best_ranked_appearance() {
        let results = vec![
            query_map(&[("JANE DOE TEAM", "https://second-best.com", 4)]),
            query_map(&[("Jane Doe Team", "https://best.com", 1)]),
        ];

        let aggregated = aggregate_entries(&results, 11);
        assert_eq!(aggregated[0].name, "Jane Doe Team");
        assert_eq!(aggregated[0].url, "https://best.com");
    }

    #[test]
    fn sorted_ascending_by_total_score() {
        let results = vec![query_map(&[
            ("Low Score Realty", "https://low.com", 2),
            ("High Score Realty", "https://high.com", 9),
        ])];

        let aggregated = aggregate_entries(&results, 11);
        assert_eq!(aggregated[0].name, "Low Score Realty");
        assert_eq!(aggregated[1].name, "High Score Realty");
        assert!(aggregated[0].total_score < aggregated[1].total_score);
    }

    #[test]
    fn ties_break_by_best_rank_then_name() {
        // Both score 1 + 2 = 3 across two queries with best_rank 1 each,
        // so the name comparison decides.
        let results = vec![
            query_map(&[("Alpha Realty", "https://alpha.com", 1), ("Beta Realty", "https://beta.com", 2)]),
            query_map(&[("Alpha Realty", "https://alpha.com", 2), ("Beta Realty", "https://beta.com", 1)]),
        ];

        let aggregated = aggregate_entries(&results, 11);
        assert_eq!(aggregated[0].total_score, aggregated[1].total_score);
        // Same best_rank too, so alphabetical by name.
        assert_eq!(aggregated[0].name, "Alpha Realty");
        assert_eq!(aggregated[1].name, "Beta Realty");
    }

    #[test]
    fn overlapping_candidate_sets_end_to_end() {
        // Three queries: {A:1, B:2}, {A:2}, {B:1, C:3} with penalty 6.
        let results = vec![
            query_map(&[("A Realty", "https://a.com", 1), ("B Realty", "https://b.com", 2)]),
            query_map(&[("A Realty", "https://a.com", 2)]),
            query_map(&[("B Realty", "https://b.com", 1), ("C Realty", "https://c.com", 3)]),
        ];

        let aggregated = aggregate_entries(&results, 6);
        assert_eq!(aggregated.len(), 3);

        let by_name = |name: &str| {
            aggregated
                .iter()
                .find(|e| e.name == name)
                .unwrap_or_else(|| panic!("{name} missing"))
        };
        assert_eq!(by_name("A Realty").total_score, 1 + 2 + 6);
        assert_eq!(by_name("B Realty").total_score, 2 + 6 + 1);
        assert_eq!(by_name("C Realty").total_score, 6 + 6 + 3);

        // A and B tie at 9; C is strictly last.
        assert_eq!(aggregated[2].name, "C Realty");
    }

    #[test]
    fn aggregation_is_idempotent() {
        let results = vec![
            query_map(&[("A Realty", "https://a.com", 1), ("B Realty", "https://b.com", 4)]),
            query_map(&[("B Realty", "https://b.com", 2)]),
        ];

        let first = aggregate_entries(&results, 21);
        let second = aggregate_entries(&results, 21);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_inputs_return_empty() {
        assert!(aggregate_entries(&[], 51).is_empty());
        assert!(aggregate_entries(&[HashMap::new(), HashMap::new()], 51).is_empty());
    }

    #[test]
    fn absent_everywhere_never_happens_but_single_query_works() {
        let results = vec![query_map(&[("Solo Realty", "https://solo.com", 7)])];
        let aggregated = aggregate_entries(&results, 51);
        assert_eq!(aggregated.len(), 1);
        assert_eq!(aggregated[0].total_score, 7);
        assert_eq!(aggregated[0].best_rank, 7);
        assert_eq!(aggregated[0].worst_rank, 7);
        assert_eq!(aggregated[0].appearance_count, 1);
    }
}

//! Human-readable rendering of the aggregated ranking.

use crate::types::AggregatedEntry;

/// Render the top-N report as plain text.
///
/// The header counts what is actually shown, so an empty aggregate renders
/// as "Top 0 agents" rather than an error. `num_queries` drives the
/// average-rank and appearance-fraction columns.
pub fn render_report(
    entries: &[AggregatedEntry],
    top_count: usize,
    num_queries: usize,
) -> String {
    let shown = top_count.min(entries.len());
    let mut out = format!("Top {shown} agents (lower total_score is better):\n");

    for (index, entry) in entries.iter().take(shown).enumerate() {
        let avg_rank = if num_queries == 0 {
            0.0
        } else {
            entry.total_score as f64 / num_queries as f64
        };
        out.push_str(&format!(
            "{}. {} - {}\n    total_score={}, avg_rank={:.2}, best_rank={}, worst_rank={}, appearances={}/{}\n",
            index + 1,
            entry.name,
            entry.url,
            entry.total_score,
            avg_rank,
            entry.best_rank,
            entry.worst_rank,
            entry.appearance_count,
            num_queries,
        ));
    }

    out
}

//! Query-set construction from an area string.
//!
//! Several near-synonymous phrasings of the same question pull different
//! result mixes out of the search provider; candidates that hold a good
//! position across many phrasings are the signal the aggregator amplifies.

/// Build the query set for an area, trimming surrounding whitespace.
pub fn build_queries(area: &str) -> Vec<String> {
    let area = area.trim();
    vec![
        format!("best realtors in {area}"),
        format!("best real estate agents in {area}"),
        format!("best real estate agents {area}"),
        format!("best realtor in {area}"),
        format!("top realtors in {area}"),
        format!("top real estate agents in {area}"),
        format!("top real estate agents {area}"),
        format!("top {area} realtors"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_eight_phrasings() {
        let queries = build_queries("pittsburgh pa");
        assert_eq!(queries.len(), 8);
        assert!(queries.contains(&"best realtors in pittsburgh pa".to_string()));
        assert!(queries.contains(&"top pittsburgh pa realtors".to_string()));
    }

    #[test]
    fn area_is_trimmed() {
        let queries = build_queries("  denver co  ");
        assert_eq!(queries[0], "best realtors in denver co");
    }

    #[test]
    fn every_query_mentions_the_area() {
        for query in build_queries("austin tx") {
            assert!(query.contains("austin tx"), "missing area in: {query}");
        }
    }
}

//! Error types for the top-agents crate.
//!
//! All errors carry stable string messages suitable for display to users.
//! Per-URL and per-query failures are contained inside the pipeline and
//! never surface through these types; what remains is configuration
//! problems and collaborator failures worth reporting.

/// Errors that can occur while discovering and ranking agent pages.
#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    /// The search provider failed for a query.
    #[error("search provider error: {0}")]
    Search(String),

    /// An HTTP request failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse an HTML response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid finder configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for top-agents results.
pub type Result<T> = std::result::Result<T, FinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_search() {
        let err = FinderError::Search("query rejected".into());
        assert_eq!(err.to_string(), "search provider error: query rejected");
    }

    #[test]
    fn display_http() {
        let err = FinderError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_parse() {
        let err = FinderError::Parse("unexpected HTML structure".into());
        assert_eq!(err.to_string(), "parse error: unexpected HTML structure");
    }

    #[test]
    fn display_config() {
        let err = FinderError::Config("results_per_query must be > 0".into());
        assert_eq!(err.to_string(), "config error: results_per_query must be > 0");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FinderError>();
    }
}

//! Discovery pipeline: per-query fetch-and-classify, then aggregation.
//!
//! [`fetcher`] turns one query into a ranked map of candidate names;
//! [`aggregate`] merges the per-query maps into one penalty-adjusted
//! global ordering.

pub mod aggregate;
pub mod fetcher;

//! Search provider implementations.
//!
//! Each module provides a struct implementing
//! [`crate::provider::SearchProvider`] against a real search engine.

pub mod google;

pub use google::GoogleProvider;

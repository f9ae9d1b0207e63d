//! Error type shared by the synthesizers and the aggregator.

use thiserror::Error;

/// Failures surfaced by node synthesis and matrix aggregation.
///
/// None of these are retried internally; the caller decides what to do.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BreakError {
    /// A synthesis request is outside the configured bounds (too many nodes
    /// on one edge, a non-positive interval, ...). Restructure the input
    /// before retrying.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A malformed or inconsistent sub-matrix or weight.
    #[error("data error: {0}")]
    Data(String),

    /// The travel-time matrix has no entry for the requested edge.
    #[error("no travel time from node {from} to node {to}")]
    Lookup { from: usize, to: usize },
}

/// Shorthand result type for this crate.
pub type Result<T> = std::result::Result<T, BreakError>;

//! Matrix aggregation.
//!
//! Merging must happen in one ordered pass per matrix: the identifiers a
//! sub-matrix receives depend on every sub-matrix merged before it.

mod aggregator;

pub use aggregator::{aggregate, insert_breaks, AggregationSummary};

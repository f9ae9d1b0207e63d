//! # u-breaks
//!
//! Travel-time matrix augmentation for vehicle routing preprocessing:
//! synthesizes virtual nodes along long edges (breaks, midpoint splits) or
//! on top of a depot (per-vehicle start nodes) and splices them into the
//! global matrix without disturbing existing entries.
//!
//! ## Modules
//!
//! - [`matrix`] — Global travel-time matrix and per-edge sub-matrices
//! - [`synthesis`] — Interval, midpoint, and dummy node synthesizers
//! - [`aggregation`] — Ordered merge of sub-matrices into the global matrix
//! - [`config`] — Synthesis options
//! - [`models`] — Demand records
//! - [`error`] — Error type
//!
//! ## Example
//!
//! ```
//! use u_breaks::aggregation::insert_breaks;
//! use u_breaks::matrix::TravelTimeMatrix;
//! use u_breaks::models::DemandRecord;
//! use u_breaks::synthesis::EdgeSynthesizer;
//!
//! let mut tm = TravelTimeMatrix::from_rows(vec![
//!     vec![Some(0.0), Some(150.0)],
//!     vec![None, Some(0.0)],
//! ])
//! .unwrap();
//! insert_breaks(&mut tm, &[DemandRecord::new(0, 1)], &EdgeSynthesizer::breaks()).unwrap();
//! assert_eq!(tm.size(), 4);
//! assert_eq!(tm.get(2, 1), Some(90.0));
//! ```

pub mod aggregation;
pub mod config;
pub mod error;
pub mod matrix;
pub mod models;
pub mod synthesis;

pub use error::{BreakError, Result};

//! Travel-time tables.
//!
//! [`TravelTimeMatrix`] is the long-lived global table; [`SubMatrix`] is the
//! small sparse table a single synthesis call produces.

mod sub_matrix;
mod travel_time;

pub use sub_matrix::SubMatrix;
pub use travel_time::TravelTimeMatrix;
pub(crate) use travel_time::check_weight;

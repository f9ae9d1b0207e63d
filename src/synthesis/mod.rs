//! Node synthesizers.
//!
//! Each synthesizer is a pure function of its inputs returning an
//! independent [`SubMatrix`](crate::matrix::SubMatrix), so edges may be
//! synthesized in any order or in parallel. Merging is left to
//! [`aggregation`](crate::aggregation).

mod dummy;
mod generator;
mod interval;
mod split;

pub use dummy::{synthesize_dummy, synthesize_vehicle_dummies};
pub use generator::{EdgeSynthesizer, Strategy};
pub use interval::{interval_node_count, synthesize_interval};
pub use split::synthesize_split;

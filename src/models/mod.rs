//! Domain model types consumed by synthesis.

mod demand;

pub use demand::{Demand, DemandRecord};

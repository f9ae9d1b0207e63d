//! Demand records: the edges synthesis works on.

use serde::{Deserialize, Serialize};

/// Anything with an origin and a destination node.
///
/// Only these two fields are consumed; richer demand types implement this
/// trait instead of being converted.
pub trait Demand {
    /// Node the trip starts at.
    fn origin(&self) -> usize;
    /// Node the trip ends at.
    fn destination(&self) -> usize;
}

/// A plain origin/destination pair.
///
/// # Examples
///
/// ```
/// use u_breaks::models::{Demand, DemandRecord};
///
/// let r = DemandRecord::new(3, 8);
/// assert_eq!(r.origin(), 3);
/// assert_eq!(r.destination(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandRecord {
    pub origin: usize,
    pub destination: usize,
}

impl DemandRecord {
    /// Creates a record for `origin → destination`.
    pub fn new(origin: usize, destination: usize) -> Self {
        Self {
            origin,
            destination,
        }
    }
}

impl Demand for DemandRecord {
    fn origin(&self) -> usize {
        self.origin
    }

    fn destination(&self) -> usize {
        self.destination
    }
}

impl<D: Demand + ?Sized> Demand for &D {
    fn origin(&self) -> usize {
        (**self).origin()
    }

    fn destination(&self) -> usize {
        (**self).destination()
    }
}

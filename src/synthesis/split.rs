//! Midpoint split of a single edge.

use log::debug;

use crate::error::{BreakError, Result};
use crate::matrix::{check_weight, SubMatrix};

/// Splits `origin → destination` in half with one node at `starting_node`.
///
/// The first half is `floor(travel_time / 2)`; any remainder goes to the
/// second half, so the halves always sum to `travel_time`. Fails with
/// [`BreakError::Configuration`] if `starting_node` is one of the endpoints.
///
/// # Examples
///
/// ```
/// use u_breaks::synthesis::synthesize_split;
///
/// let sub = synthesize_split(0, 1, 121.0, 5).unwrap();
/// assert_eq!(sub.get(0, 5), Some(60.0));
/// assert_eq!(sub.get(5, 1), Some(61.0));
/// ```
pub fn synthesize_split(
    origin: usize,
    destination: usize,
    travel_time: f64,
    starting_node: usize,
) -> Result<SubMatrix> {
    check_weight(travel_time)?;
    if starting_node == origin || starting_node == destination {
        return Err(BreakError::Configuration(format!(
            "split node {starting_node} overlaps edge {origin} -> {destination}"
        )));
    }

    let first = (travel_time / 2.0).floor();
    let node = starting_node;

    let mut sub = SubMatrix::new();
    sub.insert(origin, origin, 0.0);
    sub.insert(origin, destination, travel_time);
    sub.insert(destination, destination, 0.0);
    sub.mark_synthetic(node);
    sub.insert(origin, node, first);
    sub.insert(node, node, 0.0);
    sub.insert(node, destination, travel_time - first);

    debug!("edge {origin} -> {destination}: split at {first} min as node {node}");
    Ok(sub)
}

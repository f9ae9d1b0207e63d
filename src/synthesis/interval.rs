//! Interval insertion: one synthetic node every fixed number of minutes.
//!
//! # Algorithm
//!
//! An edge `O → D` taking `T` minutes, cut every `L` minutes, receives
//! `floor(T / L)` nodes. When `T` is an exact multiple of `L` the last node
//! would coincide with `D`, so it is dropped.
//!
//! ```text
//!   O ──L── n0 ──L── n1 ──L── ... ── n(k-1) ──(T - k·L)── D
//! ```
//!
//! Only the forward direction is populated; travel back along the edge is
//! left absent (unreachable).

use log::{debug, warn};

use crate::config::check_interval;
use crate::error::{BreakError, Result};
use crate::matrix::{check_weight, SubMatrix};

/// Number of nodes interval insertion creates for an edge of `travel_time`.
///
/// # Examples
///
/// ```
/// use u_breaks::synthesis::interval_node_count;
///
/// assert_eq!(interval_node_count(150.0, 60.0), 2);
/// assert_eq!(interval_node_count(120.0, 60.0), 1);
/// assert_eq!(interval_node_count(45.0, 60.0), 0);
/// ```
pub fn interval_node_count(travel_time: f64, interval_length: f64) -> usize {
    let count = (travel_time / interval_length).floor() as usize;
    if travel_time % interval_length == 0.0 {
        count.saturating_sub(1)
    } else {
        count
    }
}

/// Inserts a node every `interval_length` minutes along `origin → destination`.
///
/// Nodes are numbered `starting_node, starting_node + 1, ...` in travel
/// order. Fails with [`BreakError::Configuration`] when more than
/// `max_nodes` would be created, or when that range would reuse `origin` or
/// `destination`.
///
/// # Examples
///
/// ```
/// use u_breaks::synthesis::synthesize_interval;
///
/// let sub = synthesize_interval(0, 1, 150.0, 10, 60.0, 100).unwrap();
/// assert_eq!(sub.get(0, 10), Some(60.0));
/// assert_eq!(sub.get(0, 11), Some(120.0));
/// assert_eq!(sub.get(10, 11), Some(60.0));
/// assert_eq!(sub.get(11, 1), Some(30.0));
/// assert_eq!(sub.get(11, 10), None);
/// ```
pub fn synthesize_interval(
    origin: usize,
    destination: usize,
    travel_time: f64,
    starting_node: usize,
    interval_length: f64,
    max_nodes: usize,
) -> Result<SubMatrix> {
    check_weight(travel_time)?;
    check_interval(interval_length)?;

    let count = interval_node_count(travel_time, interval_length);
    if count > max_nodes {
        warn!(
            "edge {origin} -> {destination} ({travel_time} min) needs {count} nodes at \
             {interval_length} min intervals"
        );
        return Err(BreakError::Configuration(format!(
            "edge {origin} -> {destination} would need {count} nodes, limit is {max_nodes}"
        )));
    }

    let nodes = starting_node..starting_node + count;
    if let Some(id) = [origin, destination].into_iter().find(|id| nodes.contains(id)) {
        return Err(BreakError::Configuration(format!(
            "synthetic nodes {nodes:?} overlap endpoint {id} of edge {origin} -> {destination}"
        )));
    }

    let mut sub = SubMatrix::new();
    sub.insert(origin, origin, 0.0);
    sub.insert(origin, destination, travel_time);
    sub.insert(destination, destination, 0.0);

    for k in 0..count {
        let node = starting_node + k;
        let elapsed = interval_length * (k + 1) as f64;
        sub.mark_synthetic(node);
        sub.insert(origin, node, elapsed);
        sub.insert(node, node, 0.0);
        sub.insert(node, destination, travel_time - elapsed);
        for prev in 0..k {
            sub.insert(
                starting_node + prev,
                node,
                interval_length * (k - prev) as f64,
            );
        }
    }

    debug!("edge {origin} -> {destination}: {count} interval nodes from {starting_node}");
    Ok(sub)
}

//! Dummy start nodes, one per vehicle.
//!
//! A dummy node sits on top of a reference node (usually the depot): it is
//! zero minutes from the reference and reachable from each dropoff node at
//! that dropoff's cost of returning to the reference.

use log::debug;

use crate::error::{BreakError, Result};
use crate::matrix::{SubMatrix, TravelTimeMatrix};

/// Builds the sub-matrix for one dummy node.
///
/// `new_node_id` defaults to `matrix.next_id()`. The matrix is only read;
/// a dropoff with no known time to `reference_node` fails with
/// [`BreakError::Lookup`]. A `new_node_id` equal to the reference node or to
/// a dropoff fails with [`BreakError::Configuration`].
///
/// # Examples
///
/// ```
/// use u_breaks::matrix::TravelTimeMatrix;
/// use u_breaks::synthesis::synthesize_dummy;
///
/// let tm = TravelTimeMatrix::from_rows(vec![
///     vec![Some(0.0), Some(10.0), Some(20.0)],
///     vec![Some(12.0), Some(0.0), Some(5.0)],
///     vec![Some(22.0), Some(6.0), Some(0.0)],
/// ])
/// .unwrap();
/// let sub = synthesize_dummy(&tm, 0, &[1, 2], None).unwrap();
/// assert_eq!(sub.get(0, 3), Some(0.0));
/// assert_eq!(sub.get(3, 0), Some(0.0));
/// assert_eq!(sub.get(2, 3), Some(22.0));
/// ```
pub fn synthesize_dummy(
    matrix: &TravelTimeMatrix,
    reference_node: usize,
    dropoff_nodes: &[usize],
    new_node_id: Option<usize>,
) -> Result<SubMatrix> {
    let node = new_node_id.unwrap_or_else(|| matrix.next_id());
    if node == reference_node || dropoff_nodes.contains(&node) {
        return Err(BreakError::Configuration(format!(
            "dummy node {node} overlaps reference {reference_node} or a dropoff"
        )));
    }
    matrix.travel_time(reference_node, reference_node)?;

    let mut sub = SubMatrix::new();
    for &p in dropoff_nodes {
        sub.insert(p, node, matrix.travel_time(p, reference_node)?);
    }
    sub.mark_synthetic(node);
    sub.insert(reference_node, reference_node, 0.0);
    sub.insert(reference_node, node, 0.0);
    sub.insert(node, reference_node, 0.0);
    sub.insert(node, node, 0.0);

    debug!(
        "dummy node {node} on {reference_node}, reachable from {} dropoffs",
        dropoff_nodes.len()
    );
    Ok(sub)
}

/// Builds one dummy sub-matrix per vehicle, numbered `start, start + 1, ...`.
///
/// `start` defaults to `matrix.next_id()`. Every sub-matrix is computed
/// against the same unmodified matrix.
pub fn synthesize_vehicle_dummies(
    matrix: &TravelTimeMatrix,
    reference_node: usize,
    dropoff_nodes: &[usize],
    vehicles: usize,
    start: Option<usize>,
) -> Result<Vec<SubMatrix>> {
    let start = start.unwrap_or_else(|| matrix.next_id());
    (0..vehicles)
        .map(|v| synthesize_dummy(matrix, reference_node, dropoff_nodes, Some(start + v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TravelTimeMatrix {
        TravelTimeMatrix::from_rows(vec![
            vec![Some(0.0), Some(10.0), Some(20.0), Some(30.0)],
            vec![Some(12.0), Some(0.0), Some(5.0), None],
            vec![Some(22.0), Some(6.0), Some(0.0), Some(4.0)],
            vec![None, Some(9.0), Some(3.0), Some(0.0)],
        ])
        .expect("valid rows")
    }

    #[test]
    fn test_dummy_entries() {
        let tm = sample();
        let sub = synthesize_dummy(&tm, 0, &[1, 2], Some(9)).expect("valid");
        assert!(sub.is_synthetic(9));
        assert_eq!(sub.synthetic_nodes().len(), 1);
        assert_eq!(sub.get(1, 9), Some(12.0));
        assert_eq!(sub.get(2, 9), Some(22.0));
        assert_eq!(sub.get(0, 9), Some(0.0));
        assert_eq!(sub.get(9, 0), Some(0.0));
        assert_eq!(sub.get(9, 9), Some(0.0));
        // only reachable into from dropoffs
        assert_eq!(sub.get(9, 1), None);
    }

    #[test]
    fn test_default_id() {
        let tm = sample();
        let sub = synthesize_dummy(&tm, 0, &[], None).expect("valid");
        assert!(sub.is_synthetic(4));
        assert!(!sub.is_trivial());
    }

    #[test]
    fn test_missing_return_edge() {
        let tm = sample();
        assert_eq!(
            synthesize_dummy(&tm, 0, &[1, 3], None),
            Err(BreakError::Lookup { from: 3, to: 0 })
        );
    }

    #[test]
    fn test_reference_out_of_range() {
        let tm = sample();
        assert!(matches!(
            synthesize_dummy(&tm, 8, &[], None),
            Err(BreakError::Lookup { from: 8, to: 8 })
        ));
    }

    #[test]
    fn test_id_overlapping_existing_nodes() {
        let tm = sample();
        assert!(matches!(
            synthesize_dummy(&tm, 0, &[1, 2], Some(0)),
            Err(BreakError::Configuration(_))
        ));
        assert!(matches!(
            synthesize_dummy(&tm, 0, &[1, 2], Some(2)),
            Err(BreakError::Configuration(_))
        ));
        assert!(matches!(
            synthesize_vehicle_dummies(&tm, 0, &[1, 2], 2, Some(1)),
            Err(BreakError::Configuration(_))
        ));
    }

    #[test]
    fn test_vehicle_dummies_increasing_ids() {
        let tm = sample();
        let subs = synthesize_vehicle_dummies(&tm, 0, &[1, 2], 3, None).expect("valid");
        assert_eq!(subs.len(), 3);
        for (v, sub) in subs.iter().enumerate() {
            assert!(sub.is_synthetic(4 + v));
            assert_eq!(sub.get(2, 4 + v), Some(22.0));
        }
    }

    #[test]
    fn test_vehicle_dummies_none() {
        let tm = sample();
        let subs = synthesize_vehicle_dummies(&tm, 0, &[1], 0, Some(10)).expect("valid");
        assert!(subs.is_empty());
    }
}

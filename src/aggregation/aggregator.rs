//! Folding sub-matrices into the global travel-time matrix.
//!
//! # Algorithm
//!
//! Sub-matrices are merged strictly in order. For each one the synthetic
//! identifiers are shifted by a single offset so the smallest lands on the
//! running next identifier; endpoint identifiers are left alone since they
//! already name rows and columns of the global matrix. The matrix then grows
//! by the number of synthetic nodes and every cell touching a synthetic node
//! is written into the fresh rows and columns.
//!
//! ```text
//! next = |matrix|
//! for sub in subs:
//!     offset = next - min(synthetic(sub))
//!     grow(matrix, next + |synthetic(sub)|)
//!     next   = |matrix|
//! ```
//!
//! # Complexity
//!
//! Each merge reallocates the dense table, so a pass adding `k` nodes to an
//! n-node matrix over `m` sub-matrices costs O(m·(n + k)²).

use std::ops::Range;

use log::{debug, trace};

use crate::error::{BreakError, Result};
use crate::matrix::{check_weight, SubMatrix, TravelTimeMatrix};
use crate::models::Demand;
use crate::synthesis::EdgeSynthesizer;

/// Outcome of one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationSummary {
    /// Identifiers given to each merged sub-matrix, in merge order.
    pub assigned: Vec<Range<usize>>,
    /// Sub-matrices without synthetic nodes.
    pub skipped: usize,
}

impl AggregationSummary {
    /// Total number of nodes added to the matrix.
    pub fn nodes_added(&self) -> usize {
        self.assigned.iter().map(|r| r.len()).sum()
    }
}

/// Merges `subs` into `matrix` in order.
///
/// Each sub-matrix is checked before any of its cells is written. On a
/// [`BreakError::Data`] failure the matrix keeps every sub-matrix merged
/// before the bad one; nothing is rolled back.
///
/// Existing cells are never overwritten: only the rows and columns of the
/// newly assigned identifiers are filled, and cells the sub-matrix leaves
/// out stay unreachable.
///
/// # Examples
///
/// ```
/// use u_breaks::aggregation::aggregate;
/// use u_breaks::matrix::TravelTimeMatrix;
/// use u_breaks::synthesis::synthesize_interval;
///
/// let mut tm = TravelTimeMatrix::from_rows(vec![
///     vec![Some(0.0), Some(150.0)],
///     vec![Some(150.0), Some(0.0)],
/// ])
/// .unwrap();
/// let sub = synthesize_interval(0, 1, 150.0, 10, 60.0, 100).unwrap();
/// let summary = aggregate(&mut tm, [&sub]).unwrap();
///
/// assert_eq!(summary.assigned, vec![2..4]);
/// assert_eq!(tm.size(), 4);
/// assert_eq!(tm.get(0, 2), Some(60.0));
/// assert_eq!(tm.get(2, 3), Some(60.0));
/// assert_eq!(tm.get(3, 1), Some(30.0));
/// assert_eq!(tm.get(3, 2), None);
/// ```
pub fn aggregate<'a, I>(matrix: &mut TravelTimeMatrix, subs: I) -> Result<AggregationSummary>
where
    I: IntoIterator<Item = &'a SubMatrix>,
{
    let mut summary = AggregationSummary::default();
    let mut next_id = matrix.next_id();

    for (i, sub) in subs.into_iter().enumerate() {
        if sub.is_trivial() {
            trace!("sub-matrix {i}: no synthetic nodes, skipped");
            summary.skipped += 1;
            continue;
        }

        let first = check_sub_matrix(matrix, sub)?;
        let count = sub.synthetic_nodes().len();
        let shift = |id: usize| {
            if sub.is_synthetic(id) {
                id - first + next_id
            } else {
                id
            }
        };

        matrix.grow(next_id + count);
        for (from, to, time) in sub.iter() {
            if !(sub.is_synthetic(from) || sub.is_synthetic(to)) {
                continue;
            }
            let (from, to) = (shift(from), shift(to));
            if matrix.get(from, to).is_none() {
                matrix.set(from, to, time);
            }
        }

        debug!(
            "sub-matrix {i}: nodes {first}..{} merged as {next_id}..{}",
            first + count,
            next_id + count
        );
        summary.assigned.push(next_id..next_id + count);
        next_id = matrix.next_id();
    }

    Ok(summary)
}

/// Synthesizes every record with `synthesizer`, then aggregates the results
/// into `matrix` in record order.
///
/// # Examples
///
/// ```
/// use u_breaks::aggregation::insert_breaks;
/// use u_breaks::matrix::TravelTimeMatrix;
/// use u_breaks::models::DemandRecord;
/// use u_breaks::synthesis::EdgeSynthesizer;
///
/// let mut tm = TravelTimeMatrix::from_rows(vec![
///     vec![Some(0.0), Some(150.0)],
///     vec![Some(130.0), Some(0.0)],
/// ])
/// .unwrap();
/// let records = [DemandRecord::new(0, 1), DemandRecord::new(1, 0)];
/// let summary = insert_breaks(&mut tm, &records, &EdgeSynthesizer::breaks()).unwrap();
///
/// assert_eq!(summary.assigned, vec![2..4, 4..6]);
/// assert_eq!(tm.get(1, 4), Some(60.0));
/// assert_eq!(tm.get(5, 0), Some(10.0));
/// ```
pub fn insert_breaks<D: Demand>(
    matrix: &mut TravelTimeMatrix,
    records: &[D],
    synthesizer: &EdgeSynthesizer,
) -> Result<AggregationSummary> {
    let subs = synthesizer.synthesize_all(matrix, records)?;
    aggregate(matrix, &subs)
}

/// Validates `sub` against `matrix` and returns its smallest synthetic id.
fn check_sub_matrix(matrix: &TravelTimeMatrix, sub: &SubMatrix) -> Result<usize> {
    if sub.nodes().len() < 2 {
        return Err(BreakError::Data(format!(
            "sub-matrix mentions {} node(s), need at least 2",
            sub.nodes().len()
        )));
    }

    for id in sub.endpoints() {
        if !matrix.contains(id) {
            return Err(BreakError::Data(format!(
                "endpoint {id} is not in the {}-node matrix",
                matrix.size()
            )));
        }
    }

    let synthetic = sub.synthetic_nodes();
    let (first, last) = match (synthetic.first(), synthetic.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Err(BreakError::Data("sub-matrix has no synthetic nodes".into())),
    };
    if last - first + 1 != synthetic.len() {
        return Err(BreakError::Data(format!(
            "synthetic nodes {first}..={last} are not contiguous"
        )));
    }

    for (_, _, time) in sub.iter() {
        check_weight(time)?;
    }
    Ok(first)
}

//! Sparse per-edge travel-time table.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A sparse row → column → travel time table produced by one synthesis call.
///
/// Besides its cells, a sub-matrix records which identifiers are synthetic
/// (newly introduced). Every other identifier it mentions is an endpoint
/// that must already exist in the global matrix.
///
/// # Examples
///
/// ```
/// use u_breaks::matrix::SubMatrix;
///
/// let mut sub = SubMatrix::new();
/// sub.insert(0, 1, 10.0);
/// sub.insert(0, 5, 4.0);
/// sub.insert(5, 1, 6.0);
/// sub.mark_synthetic(5);
///
/// assert_eq!(sub.get(0, 5), Some(4.0));
/// assert_eq!(sub.get(5, 0), None);
/// assert_eq!(sub.synthetic_nodes().len(), 1);
/// assert_eq!(sub.endpoints().into_iter().collect::<Vec<_>>(), vec![0, 1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubMatrix {
    entries: BTreeMap<usize, BTreeMap<usize, f64>>,
    synthetic: BTreeSet<usize>,
}

impl SubMatrix {
    /// Creates an empty sub-matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the travel time from `from` to `to`, replacing any previous value.
    pub fn insert(&mut self, from: usize, to: usize, time: f64) {
        self.entries.entry(from).or_default().insert(to, time);
    }

    /// Flags `id` as a newly introduced node.
    pub fn mark_synthetic(&mut self, id: usize) {
        self.synthetic.insert(id);
    }

    /// Travel time from `from` to `to`, or `None` if the cell is absent.
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        self.entries.get(&from)?.get(&to).copied()
    }

    /// Identifiers introduced by this sub-matrix, ascending.
    pub fn synthetic_nodes(&self) -> &BTreeSet<usize> {
        &self.synthetic
    }

    /// Returns `true` if `id` was introduced by this sub-matrix.
    pub fn is_synthetic(&self, id: usize) -> bool {
        self.synthetic.contains(&id)
    }

    /// Every identifier mentioned as a row or a column.
    pub fn nodes(&self) -> BTreeSet<usize> {
        let mut nodes: BTreeSet<usize> = self.entries.keys().copied().collect();
        nodes.extend(self.columns());
        nodes.extend(self.synthetic.iter().copied());
        nodes
    }

    /// Identifiers that are mentioned but not synthetic.
    pub fn endpoints(&self) -> BTreeSet<usize> {
        self.nodes()
            .into_iter()
            .filter(|id| !self.synthetic.contains(id))
            .collect()
    }

    /// Distinct column identifiers.
    pub fn columns(&self) -> BTreeSet<usize> {
        self.entries
            .values()
            .flat_map(|row| row.keys().copied())
            .collect()
    }

    /// Number of rows with at least one cell.
    pub fn num_rows(&self) -> usize {
        self.entries.len()
    }

    /// Number of populated cells.
    pub fn num_entries(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    /// `true` when no node was introduced, so there is nothing to merge.
    pub fn is_trivial(&self) -> bool {
        self.synthetic.is_empty()
    }

    /// Iterates over `(from, to, time)` triples in row, then column order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.entries
            .iter()
            .flat_map(|(&from, row)| row.iter().map(move |(&to, &t)| (from, to, t)))
    }
}

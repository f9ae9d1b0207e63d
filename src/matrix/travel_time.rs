//! Dense directed travel-time matrix with explicit unreachable cells.

use serde::{Deserialize, Serialize};

use crate::error::{BreakError, Result};

/// A dense n×n travel-time matrix stored in row-major order.
///
/// Node identifiers are the contiguous range `0..size()`. A cell holding
/// `None` means there is no known directed edge; it is never read as zero.
///
/// # Examples
///
/// ```
/// use u_breaks::matrix::TravelTimeMatrix;
///
/// let tm = TravelTimeMatrix::from_rows(vec![
///     vec![Some(0.0), Some(150.0)],
///     vec![None, Some(0.0)],
/// ])
/// .unwrap();
/// assert_eq!(tm.get(0, 1), Some(150.0));
/// assert_eq!(tm.get(1, 0), None);
/// assert_eq!(tm.size(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelTimeMatrix {
    data: Vec<Option<f64>>,
    size: usize,
}

impl TravelTimeMatrix {
    /// Creates a matrix of the given size with every cell unreachable.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![None; size * size],
            size,
        }
    }

    /// Creates a matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size` or a
    /// present weight is negative or non-finite.
    pub fn from_data(size: usize, data: Vec<Option<f64>>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        if data.iter().flatten().any(|&v| check_weight(v).is_err()) {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a matrix from rows of cells.
    ///
    /// Every row must have as many cells as there are rows, and every present
    /// weight must be finite and non-negative.
    pub fn from_rows(rows: Vec<Vec<Option<f64>>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(BreakError::Data(format!(
                    "row {i} has {} cells, expected {size}",
                    row.len()
                )));
            }
            for value in row.iter().flatten() {
                check_weight(*value)?;
            }
            data.extend(row);
        }
        Ok(Self { data, size })
    }

    /// Returns the travel time from `from` to `to`, or `None` if unreachable
    /// or out of range.
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.data[from * self.size + to]
    }

    /// Returns the travel time from `from` to `to`.
    ///
    /// Fails with [`BreakError::Lookup`] when the edge is absent.
    pub fn travel_time(&self, from: usize, to: usize) -> Result<f64> {
        self.get(from, to).ok_or(BreakError::Lookup { from, to })
    }

    /// Returns the travel time, treating an absent edge as infinitely long.
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.get(from, to).unwrap_or(f64::INFINITY)
    }

    /// Sets the travel time from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, from: usize, to: usize, time: f64) {
        self.data[from * self.size + to] = Some(time);
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// First identifier not yet in use (one past the largest identifier).
    pub fn next_id(&self) -> usize {
        self.size
    }

    /// Returns `true` if `id` names a row/column of this matrix.
    pub fn contains(&self, id: usize) -> bool {
        id < self.size
    }

    /// Number of reachable (present) cells.
    pub fn num_entries(&self) -> usize {
        self.data.iter().filter(|c| c.is_some()).count()
    }

    /// Grows the matrix to `new_size` nodes. New cells are unreachable and
    /// every existing cell keeps its value. Shrinking is a no-op.
    pub fn grow(&mut self, new_size: usize) {
        if new_size <= self.size {
            return;
        }
        let mut data = vec![None; new_size * new_size];
        for i in 0..self.size {
            let old = &self.data[i * self.size..(i + 1) * self.size];
            data[i * new_size..i * new_size + self.size].copy_from_slice(old);
        }
        self.data = data;
        self.size = new_size;
    }

    /// Row-major numeric copy with absent cells replaced by `unreachable`.
    pub fn to_dense(&self, unreachable: f64) -> Vec<f64> {
        self.data.iter().map(|c| c.unwrap_or(unreachable)).collect()
    }
}

/// Fails with [`BreakError::Data`] unless `value` is a usable travel time.
pub(crate) fn check_weight(value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(BreakError::Data(format!("invalid travel time {value}")));
    }
    Ok(())
}

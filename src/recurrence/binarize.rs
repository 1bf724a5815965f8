//! Thresholding a distance matrix into a recurrence plot.

use nalgebra::DMatrix;

use crate::constants::EPS_SCALE;
use crate::perceptual::DistanceMatrix;

/// Binary N'×N' adjacency of reconstructed states: 1 where two states lie
/// within `eps` of each other.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurrenceMatrix {
    cells: DMatrix<u8>,
    eps: f64,
}

impl Default for RecurrenceMatrix {
    fn default() -> Self {
        Self {
            cells: DMatrix::zeros(0, 0),
            eps: 0.0,
        }
    }
}

impl RecurrenceMatrix {
    /// Build an n×n matrix from a predicate. Used for hand-made plots.
    pub fn from_fn<F>(n: usize, mut recurrent: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        Self {
            cells: DMatrix::from_fn(n, n, |i, j| recurrent(i, j) as u8),
            eps: 0.0,
        }
    }

    /// Build from nested rows. The matrix is `rows.len()` square; any
    /// nonzero cell counts as recurrent and missing cells count as 0.
    pub fn from_rows(rows: &[Vec<u8>]) -> Self {
        Self::from_fn(rows.len(), |i, j| {
            rows[i].get(j).copied().unwrap_or(0) != 0
        })
    }

    pub fn len(&self) -> usize {
        self.cells.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Radius the matrix was thresholded at (0 for hand-made plots)
    pub fn eps(&self) -> f64 {
        self.eps
    }

    pub fn get(&self, i: usize, j: usize) -> u8 {
        self.cells[(i, j)]
    }

    pub fn is_recurrent(&self, i: usize, j: usize) -> bool {
        self.cells[(i, j)] == 1
    }

    /// Number of 1-entries over the whole matrix, main diagonal included
    pub fn recurrence_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    pub fn as_matrix(&self) -> &DMatrix<u8> {
        &self.cells
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.len())
            .map(|i| self.cells.row(i).iter().copied().collect())
            .collect()
    }
}

/// Recurrence radius for a given threshold: threshold · max_dist · 0.5
pub fn recurrence_eps(max_dist: f64, threshold: f64) -> f64 {
    threshold * max_dist * EPS_SCALE
}

/// Mark every pair whose distance is at most `threshold · max_dist · 0.5`.
///
/// A constant signal has `max_dist == 0`, so eps is 0 and every entry
/// (all of them 0) is recurrent.
pub fn binarize(distances: &DistanceMatrix, threshold: f64) -> RecurrenceMatrix {
    let eps = recurrence_eps(distances.max_dist(), threshold);
    let n = distances.len();

    RecurrenceMatrix {
        cells: DMatrix::from_fn(n, n, |i, j| (distances.get(i, j) <= eps) as u8),
        eps,
    }
}

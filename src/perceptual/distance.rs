//! Pairwise Euclidean distances between delay vectors.

use nalgebra::DMatrix;

use super::takens_embedding::TakensEmbedding;

/// Full N'×N' distance matrix together with its largest entry.
///
/// Symmetric with a zero diagonal. `max_dist` is fixed at construction and
/// belongs to this build only.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    distances: DMatrix<f64>,
    max_dist: f64,
}

impl Default for DistanceMatrix {
    fn default() -> Self {
        Self::empty()
    }
}

impl DistanceMatrix {
    /// The 0×0 matrix returned when the series is too short to embed
    pub fn empty() -> Self {
        Self {
            distances: DMatrix::zeros(0, 0),
            max_dist: 0.0,
        }
    }

    /// Embed `signal` with dimension `m` and lag `tau`, then measure every pair.
    pub fn build(signal: &[f64], m: usize, tau: usize) -> Self {
        let vectors = TakensEmbedding::with_params(m, tau).embed(signal);
        Self::from_vectors(&vectors)
    }

    /// Distances between already-reconstructed vectors.
    ///
    /// Only the upper triangle is computed; it is mirrored into the lower one.
    pub fn from_vectors(vectors: &[Vec<f64>]) -> Self {
        let n = vectors.len();
        if n == 0 {
            return Self::empty();
        }

        let mut distances = DMatrix::<f64>::zeros(n, n);
        let mut max_dist: f64 = 0.0;

        for i in 0..n {
            for j in (i + 1)..n {
                let d = euclidean_distance(&vectors[i], &vectors[j]);
                distances[(i, j)] = d;
                distances[(j, i)] = d;
                if d > max_dist {
                    max_dist = d;
                }
            }
        }

        Self {
            distances,
            max_dist,
        }
    }

    /// Number of delay vectors N'
    pub fn len(&self) -> usize {
        self.distances.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn max_dist(&self) -> f64 {
        self.max_dist
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.distances[(i, j)]
    }

    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.distances
    }

    /// Row-major copy for consumers that want nested vectors
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.len())
            .map(|i| self.distances.row(i).iter().copied().collect())
            .collect()
    }

    /// 8-bit gray levels ⌊d / max_dist · 255⌋ for pixel-grid rendering.
    ///
    /// A zero `max_dist` (constant signal) yields an all-black matrix.
    pub fn grayscale(&self) -> DMatrix<u8> {
        let n = self.len();
        if self.max_dist <= 0.0 {
            return DMatrix::from_element(n, n, 0u8);
        }
        let scale = 255.0 / self.max_dist;
        DMatrix::from_fn(n, n, |i, j| {
            (self.distances[(i, j)] * scale).floor().clamp(0.0, 255.0) as u8
        })
    }
}

/// Compute Euclidean distance between two vectors
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

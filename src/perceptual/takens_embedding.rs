//! Takens' Embedding: State-Space Reconstruction from a Scalar Series
//!
//! The topological structure of a dynamical system's attractor can be
//! reconstructed from a time series of a single observable by stacking
//! time-delayed copies of that observable.

use tracing::debug;

/// Parameters for delay-vector reconstruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakensEmbedding {
    /// Embedding dimension m - number of delayed coordinates per vector
    pub dimension: usize,

    /// Time lag τ - stride between coordinates, in samples
    pub time_lag: usize,
}

impl Default for TakensEmbedding {
    fn default() -> Self {
        Self {
            dimension: crate::constants::DEFAULT_EMBEDDING_DIM,
            time_lag: crate::constants::DEFAULT_TIME_LAG,
        }
    }
}

impl TakensEmbedding {
    /// Create embedding with custom parameters (both clamped to at least 1)
    pub fn with_params(dimension: usize, time_lag: usize) -> Self {
        Self {
            dimension: dimension.max(1),
            time_lag: time_lag.max(1),
        }
    }

    /// Samples spanned by one delay vector beyond its first coordinate, (m - 1)τ
    pub fn window_span(&self) -> Option<usize> {
        self.dimension.saturating_sub(1).checked_mul(self.time_lag)
    }

    /// Number of delay vectors N' = N - (m - 1)τ, or 0 when the series is too short
    pub fn vector_count(&self, series_len: usize) -> usize {
        self.window_span()
            .and_then(|span| series_len.checked_sub(span))
            .unwrap_or(0)
    }

    /// Check if a series of `series_len` samples yields at least one vector
    pub fn has_sufficient_data(&self, series_len: usize) -> bool {
        self.vector_count(series_len) > 0
    }

    /// Reconstruct delay vectors
    ///
    /// v(i) = [s(i), s(i+τ), s(i+2τ), ..., s(i+(m-1)τ)]
    pub fn embed(&self, series: &[f64]) -> Vec<Vec<f64>> {
        let count = self.vector_count(series.len());
        if count == 0 {
            debug!(
                len = series.len(),
                dimension = self.dimension,
                time_lag = self.time_lag,
                "series too short for embedding"
            );
            return Vec::new();
        }

        (0..count)
            .map(|i| {
                (0..self.dimension)
                    .map(|j| series[i + j * self.time_lag])
                    .collect()
            })
            .collect()
    }
}

/// Convenience wrapper around [`TakensEmbedding::embed`]
pub fn delay_embed(series: &[f64], dimension: usize, time_lag: usize) -> Vec<Vec<f64>> {
    TakensEmbedding::with_params(dimension, time_lag).embed(series)
}

/// Three-coordinate trajectory [x(t), x(t+τ), x(t+2τ)] for 3-D display,
/// capped at `limit` points.
pub fn phase_space_projection(series: &[f64], time_lag: usize, limit: usize) -> Vec<[f64; 3]> {
    let embedding = TakensEmbedding::with_params(3, time_lag);
    let lag = embedding.time_lag;
    let count = embedding.vector_count(series.len()).min(limit);

    (0..count)
        .map(|i| [series[i], series[i + lag], series[i + 2 * lag]])
        .collect()
}

//! The end-to-end pipeline: generate → embed → distances → binarize → RQA.
//!
//! Every consumer goes through this module. Each call recomputes every stage
//! from scratch; nothing is retained between calls.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_EMBEDDING_DIM, DEFAULT_FREQUENCY, DEFAULT_LENGTH, DEFAULT_NOISE_LEVEL,
    DEFAULT_THRESHOLD, DEFAULT_TIME_LAG,
};
use crate::generative::{generate, RandomSource, SignalKind};
use crate::perceptual::DistanceMatrix;
use crate::recurrence::{binarize, compute_rqa, RecurrenceMatrix, RqaMetrics};

/// Parameters of the signal generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalParams {
    pub kind: SignalKind,
    pub length: usize,
    pub frequency: f64,
    pub noise_level: f64,
}

impl Default for SignalParams {
    fn default() -> Self {
        Self {
            kind: SignalKind::Sine,
            length: DEFAULT_LENGTH,
            frequency: DEFAULT_FREQUENCY,
            noise_level: DEFAULT_NOISE_LEVEL,
        }
    }
}

impl SignalParams {
    /// Replace values the generator cannot use with defaults; never fails.
    pub fn sanitized(&self) -> Self {
        Self {
            kind: self.kind,
            length: self.length,
            frequency: if self.frequency.is_finite() && self.frequency > 0.0 {
                self.frequency
            } else {
                DEFAULT_FREQUENCY
            },
            noise_level: if self.noise_level.is_finite() && self.noise_level > 0.0 {
                self.noise_level
            } else {
                0.0
            },
        }
    }
}

/// Parameters of embedding and thresholding
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingParams {
    /// Embedding dimension m
    pub dimension: usize,
    /// Lag τ
    pub time_lag: usize,
    /// Recurrence threshold as a fraction of the maximum distance, in (0, 1]
    pub threshold: f64,
}

impl Default for EmbeddingParams {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_EMBEDDING_DIM,
            time_lag: DEFAULT_TIME_LAG,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl EmbeddingParams {
    pub fn new(dimension: usize, time_lag: usize, threshold: f64) -> Self {
        Self {
            dimension,
            time_lag,
            threshold,
        }
    }

    /// m and τ are raised to 1; a non-positive or non-finite threshold falls
    /// back to the default and anything above 1 is clamped to 1.
    pub fn sanitized(&self) -> Self {
        let threshold = if self.threshold.is_finite() && self.threshold > 0.0 {
            self.threshold.min(1.0)
        } else {
            DEFAULT_THRESHOLD
        };
        Self {
            dimension: self.dimension.max(1),
            time_lag: self.time_lag.max(1),
            threshold,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineParams {
    pub signal: SignalParams,
    pub embedding: EmbeddingParams,
}

impl PipelineParams {
    pub fn sanitized(&self) -> Self {
        Self {
            signal: self.signal.sanitized(),
            embedding: self.embedding.sanitized(),
        }
    }
}

/// Everything derived from one signal under one set of embedding parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecurrenceAnalysis {
    pub distances: DistanceMatrix,
    pub recurrence: RecurrenceMatrix,
    pub metrics: RqaMetrics,
}

impl RecurrenceAnalysis {
    /// Number of reconstructed states N'
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub signal: Vec<f64>,
    pub analysis: RecurrenceAnalysis,
}

/// Embed, measure, threshold and quantify a fixed signal.
///
/// A series too short for (m, τ) yields empty matrices and zero metrics.
pub fn analyze(signal: &[f64], params: &EmbeddingParams) -> RecurrenceAnalysis {
    let params = params.sanitized();

    let distances = DistanceMatrix::build(signal, params.dimension, params.time_lag);
    let recurrence = binarize(&distances, params.threshold);
    let metrics = compute_rqa(&recurrence);

    RecurrenceAnalysis {
        distances,
        recurrence,
        metrics,
    }
}

/// Run every stage, drawing randomness from `rng`.
pub fn run_pipeline_with<R: RandomSource + ?Sized>(
    params: &PipelineParams,
    rng: &mut R,
) -> PipelineOutput {
    let params = params.sanitized();
    let s = &params.signal;

    let signal = generate(s.kind, s.length, s.frequency, s.noise_level, rng);
    let analysis = analyze(&signal, &params.embedding);

    PipelineOutput { signal, analysis }
}

/// Run every stage with the thread-local entropy source.
pub fn run_pipeline(params: &PipelineParams) -> PipelineOutput {
    run_pipeline_with(params, &mut rand::thread_rng())
}

#![allow(clippy::needless_range_loop)] // Indexed loops read clearer for matrix scans

pub mod cache;
pub mod config;
pub mod constants;
pub mod generative;
pub mod perceptual;
pub mod pipeline;
pub mod recurrence;

pub use cache::{CacheStats, RecurrenceCache};
pub use config::RecurplotConfig;
pub use generative::{generate, generate_signal, RandomSource, SignalKind};
pub use perceptual::{delay_embed, phase_space_projection, DistanceMatrix, TakensEmbedding};
pub use pipeline::{
    analyze, run_pipeline, run_pipeline_with, EmbeddingParams, PipelineOutput, PipelineParams,
    RecurrenceAnalysis, SignalParams,
};
pub use recurrence::{binarize, compute_rqa, LineStatistics, RecurrenceMatrix, RqaMetrics};

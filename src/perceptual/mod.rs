//! Perceptual System: State-Space Reconstruction
//!
//! Unfolds a scalar series into delay vectors and measures how far apart
//! every pair of reconstructed states lies.

pub mod distance;
pub mod takens_embedding;

pub use distance::{euclidean_distance, DistanceMatrix};
pub use takens_embedding::{delay_embed, phase_space_projection, TakensEmbedding};

//! Generative Engine: synthetic test signals for recurrence analysis
//!
//! Deterministic oscillators, chaotic flows and stochastic switching
//! processes, all behind one `generate` entry point.

pub mod intermittent;
pub mod lorenz;
pub mod random_source;
pub mod signal;

pub use intermittent::{IntermittentProcess, Phase};
pub use lorenz::{lorenz_series, LorenzState};
pub use random_source::RandomSource;
pub use signal::{generate, generate_signal, SignalKind};

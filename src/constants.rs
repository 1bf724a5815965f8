// src/constants.rs

/// Default number of samples produced by the signal generator
pub const DEFAULT_LENGTH: usize = 150;

/// Default oscillation frequency (cycles per sample)
pub const DEFAULT_FREQUENCY: f64 = 0.05;

/// Default additive noise amplitude (no noise)
pub const DEFAULT_NOISE_LEVEL: f64 = 0.0;

/// Default embedding dimension m
pub const DEFAULT_EMBEDDING_DIM: usize = 3;

/// Default embedding lag τ
pub const DEFAULT_TIME_LAG: usize = 1;

/// Default recurrence threshold, as a fraction of the maximum distance
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// eps = threshold * max_dist * EPS_SCALE
pub const EPS_SCALE: f64 = 0.5;

/// Shortest run of recurrent points that counts as a diagonal or vertical line
pub const MIN_LINE_LENGTH: usize = 2;

/// Slope of the linear ramp in the `drift` model
pub const DRIFT_SLOPE: f64 = 0.015;

/// Base frequency of the `quasiperiodic` model
pub const QUASIPERIODIC_FREQUENCY: f64 = 0.05;

/// Point cap for the 3-D phase-space projection
pub const PHASE_SPACE_POINT_LIMIT: usize = 2000;

/// Lorenz system parameters
pub mod lorenz {
    pub const SIGMA: f64 = 10.0;
    pub const RHO: f64 = 28.0;
    pub const BETA: f64 = 8.0 / 3.0;
    pub const DT: f64 = 0.01;
    /// Integration steps per emitted sample
    pub const SUBSAMPLE: usize = 10;
    pub const INITIAL_STATE: [f64; 3] = [1.0, 1.0, 1.0];
}

/// Two-state intermittency model
pub mod intermittent {
    pub const LAMINAR_LEVEL: f64 = 0.5;
    /// Full width of the laminar jitter band (±0.025)
    pub const LAMINAR_JITTER: f64 = 0.05;
    pub const LAMINAR_MIN_DWELL: usize = 30;
    pub const LAMINAR_EXIT_PROBABILITY: f64 = 0.05;
    pub const BURST_MIN_DWELL: usize = 10;
    pub const BURST_EXIT_PROBABILITY: f64 = 0.2;
}

/// Synthetic BOLD-like models
pub mod fmri {
    pub const SLOW_RATE: f64 = 0.03;
    pub const FAST_RATE: f64 = 0.08;

    pub const HEALTHY_SLOW_GAIN: f64 = 0.5;
    pub const HEALTHY_FAST_GAIN: f64 = 0.3;
    /// Full width of the healthy jitter band (±0.075)
    pub const HEALTHY_NOISE_WIDTH: f64 = 0.15;

    pub const MCI_GAIN: f64 = 0.4;
    pub const MCI_PHASE_JITTER: f64 = 0.3;
    /// Full width of the MCI noise band (±0.25)
    pub const MCI_NOISE_WIDTH: f64 = 0.5;
}

/// Recurrence cache defaults
pub mod cache {
    pub const DEFAULT_CAPACITY: usize = 32;
}

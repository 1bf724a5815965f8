//! Injectable randomness for the signal models.
//!
//! Every stochastic model draws through [`RandomSource`] instead of a global
//! generator, so tests can hand in a seeded or scripted source while
//! production code passes `rand::thread_rng()`.

use rand::{Rng, RngCore};

/// A stream of uniform draws from `[0, 1)`.
pub trait RandomSource {
    /// Next uniform draw from `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform draw from `[-width / 2, width / 2)`
    fn centered(&mut self, width: f64) -> f64 {
        (self.next_unit() - 0.5) * width
    }
}

impl<R: RngCore> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

//! Two-state intermittency: long quiet laminar stretches broken by noisy bursts.

use super::random_source::RandomSource;
use crate::constants::intermittent::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Laminar,
    Burst,
}

/// Switching process with a dwell counter per phase.
///
/// A phase may only be left once its counter exceeds the minimum dwell; from
/// then on every step leaves it with a fixed probability. The counter restarts
/// at zero on every switch.
#[derive(Debug, Clone)]
pub struct IntermittentProcess {
    phase: Phase,
    dwell: usize,
}

impl Default for IntermittentProcess {
    fn default() -> Self {
        Self {
            phase: Phase::Laminar,
            dwell: 0,
        }
    }
}

impl IntermittentProcess {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Emit one sample and advance the switching state.
    pub fn sample<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> f64 {
        let (value, min_dwell, exit_probability, next) = match self.phase {
            Phase::Laminar => (
                LAMINAR_LEVEL + rng.centered(LAMINAR_JITTER),
                LAMINAR_MIN_DWELL,
                LAMINAR_EXIT_PROBABILITY,
                Phase::Burst,
            ),
            Phase::Burst => (
                rng.centered(2.0),
                BURST_MIN_DWELL,
                BURST_EXIT_PROBABILITY,
                Phase::Laminar,
            ),
        };

        self.dwell += 1;
        // The switch draw is only taken once the dwell limit is passed.
        if self.dwell > min_dwell && rng.next_unit() > 1.0 - exit_probability {
            self.phase = next;
            self.dwell = 0;
        }

        value
    }
}

pub fn intermittent_series<R: RandomSource + ?Sized>(length: usize, rng: &mut R) -> Vec<f64> {
    let mut process = IntermittentProcess::new();
    (0..length).map(|_| process.sample(rng)).collect()
}

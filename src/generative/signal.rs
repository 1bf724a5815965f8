//! Test signal synthesis.
//!
//! Each [`SignalKind`] is a small generative model producing a finite real
//! sequence. Stochastic models draw through a [`RandomSource`]; the
//! deterministic ones (`sine`, `drift`, `quasiperiodic`, `lorenz`) never touch it.

use std::f64::consts::{PI, SQRT_2};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::intermittent::intermittent_series;
use super::lorenz::lorenz_series;
use super::random_source::RandomSource;
use crate::constants::{fmri, DRIFT_SLOPE, QUASIPERIODIC_FREQUENCY};

/// Generative model selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SignalKind {
    /// sin(2π f i)
    #[default]
    Sine,
    /// i.i.d. Uniform(-1, 1)
    Noise,
    /// Normalized x-coordinate of the Lorenz attractor
    Lorenz,
    /// Sine riding on a linear ramp (non-stationary mean)
    Drift,
    /// Laminar plateaus interrupted by noisy bursts
    Intermittent,
    /// Two incommensurate sines
    Quasiperiodic,
    /// Slow + fast rhythm with small jitter
    FmriHealthy,
    /// Phase-jittered rhythm with heavier noise
    FmriMci,
}

impl SignalKind {
    pub fn all() -> &'static [SignalKind] {
        &[
            SignalKind::Sine,
            SignalKind::Noise,
            SignalKind::Lorenz,
            SignalKind::Drift,
            SignalKind::Intermittent,
            SignalKind::Quasiperiodic,
            SignalKind::FmriHealthy,
            SignalKind::FmriMci,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SignalKind::Sine => "sine",
            SignalKind::Noise => "noise",
            SignalKind::Lorenz => "lorenz",
            SignalKind::Drift => "drift",
            SignalKind::Intermittent => "intermittent",
            SignalKind::Quasiperiodic => "quasiperiodic",
            SignalKind::FmriHealthy => "fmri_healthy",
            SignalKind::FmriMci => "fmri_mci",
        }
    }

    /// Look up a model by name. Unknown names fall back to `sine`.
    pub fn from_name(name: &str) -> Self {
        let normalized = name.trim().to_ascii_lowercase();
        match Self::all().iter().find(|k| k.name() == normalized) {
            Some(kind) => *kind,
            None => {
                debug!(requested = %name, "unknown signal type, falling back to sine");
                SignalKind::Sine
            }
        }
    }

    /// Whether the model itself consumes randomness (before any added noise)
    pub fn is_stochastic(&self) -> bool {
        matches!(
            self,
            SignalKind::Noise
                | SignalKind::Intermittent
                | SignalKind::FmriHealthy
                | SignalKind::FmriMci
        )
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for SignalKind {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for SignalKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<SignalKind> for String {
    fn from(kind: SignalKind) -> Self {
        kind.name().to_string()
    }
}

/// Synthesize exactly `length` samples of `kind`.
///
/// When `noise_level > 0`, Uniform(-noise_level, noise_level) is added to
/// every sample on top of whatever noise the model already carries.
pub fn generate<R: RandomSource + ?Sized>(
    kind: SignalKind,
    length: usize,
    frequency: f64,
    noise_level: f64,
    rng: &mut R,
) -> Vec<f64> {
    let omega = 2.0 * PI * frequency;

    let mut signal: Vec<f64> = match kind {
        SignalKind::Sine => (0..length).map(|i| (omega * i as f64).sin()).collect(),
        SignalKind::Noise => (0..length).map(|_| rng.centered(2.0)).collect(),
        SignalKind::Lorenz => lorenz_series(length),
        SignalKind::Drift => (0..length)
            .map(|i| (omega * i as f64).sin() + i as f64 * DRIFT_SLOPE)
            .collect(),
        SignalKind::Intermittent => intermittent_series(length, rng),
        SignalKind::Quasiperiodic => {
            let w = 2.0 * PI * QUASIPERIODIC_FREQUENCY;
            (0..length)
                .map(|i| {
                    let t = i as f64;
                    (w * t).sin() + (w * SQRT_2 * t).sin()
                })
                .collect()
        }
        SignalKind::FmriHealthy => (0..length)
            .map(|i| {
                let t = i as f64;
                (fmri::SLOW_RATE * t).sin() * fmri::HEALTHY_SLOW_GAIN
                    + (fmri::FAST_RATE * t).sin() * fmri::HEALTHY_FAST_GAIN
                    + rng.centered(fmri::HEALTHY_NOISE_WIDTH)
            })
            .collect(),
        SignalKind::FmriMci => (0..length)
            .map(|i| {
                let phase = rng.next_unit() * fmri::MCI_PHASE_JITTER;
                (fmri::SLOW_RATE * i as f64 + phase).sin() * fmri::MCI_GAIN
                    + rng.centered(fmri::MCI_NOISE_WIDTH)
            })
            .collect(),
    };

    if noise_level > 0.0 {
        for v in signal.iter_mut() {
            *v += rng.centered(2.0 * noise_level);
        }
    }

    signal
}

/// [`generate`] drawing from the thread-local entropy source.
pub fn generate_signal(
    kind: SignalKind,
    length: usize,
    frequency: f64,
    noise_level: f64,
) -> Vec<f64> {
    generate(kind, length, frequency, noise_level, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generative::random_source::scripted::ScriptedSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sine_exact() {
        let signal = generate_signal(SignalKind::Sine, 10, 0.1, 0.0);
        let expected: Vec<f64> = (0..10)
            .map(|i| (2.0 * PI * 0.1 * i as f64).sin())
            .collect();
        assert_eq!(signal, expected);
    }

    #[test]
    fn test_exact_lengths() {
        let mut rng = StdRng::seed_from_u64(11);
        for &kind in SignalKind::all() {
            for &len in &[0usize, 1, 17, 150] {
                let s = generate(kind, len, 0.05, 0.1, &mut rng);
                assert_eq!(s.len(), len, "{} with length {}", kind, len);
                assert!(s.iter().all(|v| v.is_finite()));
            }
        }
    }

    #[test]
    fn test_unknown_name_falls_back_to_sine() {
        assert_eq!(SignalKind::from_name("sawtooth"), SignalKind::Sine);
        assert_eq!(SignalKind::from_name(""), SignalKind::Sine);
        assert_eq!(SignalKind::from_name("FMRI_MCI"), SignalKind::FmriMci);

        for &kind in SignalKind::all() {
            assert_eq!(SignalKind::from_name(kind.name()), kind);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&SignalKind::FmriHealthy).unwrap();
        assert_eq!(json, "\"fmri_healthy\"");

        let kind: SignalKind = serde_json::from_str("\"lorenz\"").unwrap();
        assert_eq!(kind, SignalKind::Lorenz);

        let fallback: SignalKind = serde_json::from_str("\"square\"").unwrap();
        assert_eq!(fallback, SignalKind::Sine);
    }

    #[test]
    fn test_deterministic_models_ignore_rng() {
        for &kind in SignalKind::all().iter().filter(|k| !k.is_stochastic()) {
            let mut rng = ScriptedSource::constant(0.25);
            let a = generate(kind, 40, 0.07, 0.0, &mut rng);
            assert_eq!(rng.draws, 0, "{} consumed randomness", kind);

            let b = generate(kind, 40, 0.07, 0.0, &mut StdRng::seed_from_u64(3));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_noise_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let s = generate(SignalKind::Noise, 1000, 0.05, 0.0, &mut rng);
        assert!(s.iter().all(|v| (-1.0..1.0).contains(v)));
        let mean = s.iter().sum::<f64>() / s.len() as f64;
        assert!(mean.abs() < 0.1);
    }

    #[test]
    fn test_drift_ramp() {
        let s = generate_signal(SignalKind::Drift, 100, 0.05, 0.0);
        // frequency 0.05 completes a full period every 20 samples
        assert!((s[20] - s[0] - 20.0 * DRIFT_SLOPE).abs() < 1e-9);
        assert!((s[80] - s[0] - 80.0 * DRIFT_SLOPE).abs() < 1e-9);
    }

    #[test]
    fn test_quasiperiodic_ignores_frequency() {
        let a = generate_signal(SignalKind::Quasiperiodic, 60, 0.01, 0.0);
        let b = generate_signal(SignalKind::Quasiperiodic, 60, 0.3, 0.0);
        assert_eq!(a, b);
        assert!(a.iter().all(|v| v.abs() <= 2.0));
    }

    #[test]
    fn test_fmri_models_with_midpoint_draws() {
        // Draws of 0.5 zero out every centered noise term.
        let mut rng = ScriptedSource::constant(0.5);
        let healthy = generate(SignalKind::FmriHealthy, 30, 0.05, 0.0, &mut rng);
        for (i, v) in healthy.iter().enumerate() {
            let t = i as f64;
            let expected = (0.03 * t).sin() * 0.5 + (0.08 * t).sin() * 0.3;
            assert!((v - expected).abs() < 1e-12);
        }

        let mut rng = ScriptedSource::constant(0.5);
        let mci = generate(SignalKind::FmriMci, 30, 0.05, 0.0, &mut rng);
        for (i, v) in mci.iter().enumerate() {
            let expected = (0.03 * i as f64 + 0.15).sin() * 0.4;
            assert!((v - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_additive_noise_bounds() {
        let clean = generate_signal(SignalKind::Sine, 200, 0.05, 0.0);
        let noisy = generate(SignalKind::Sine, 200, 0.05, 0.2, &mut StdRng::seed_from_u64(9));

        let mut max_dev: f64 = 0.0;
        for (a, b) in clean.iter().zip(noisy.iter()) {
            max_dev = max_dev.max((a - b).abs());
        }
        assert!(max_dev <= 0.2);
        assert!(max_dev > 0.0);
    }

    #[test]
    fn test_zero_noise_level_draws_nothing() {
        let mut rng = ScriptedSource::constant(0.9);
        generate(SignalKind::Sine, 50, 0.05, 0.0, &mut rng);
        assert_eq!(rng.draws, 0);

        generate(SignalKind::Sine, 50, 0.05, 0.1, &mut rng);
        assert_eq!(rng.draws, 50);
    }
}

//! Lorenz attractor, observed through its x-coordinate.

use crate::constants::lorenz::*;

/// State of the Lorenz system (x, y, z)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorenzState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for LorenzState {
    fn default() -> Self {
        let [x, y, z] = INITIAL_STATE;
        Self { x, y, z }
    }
}

impl LorenzState {
    /// One Euler step of
    /// dx/dt = σ(y − x), dy/dt = x(ρ − z) − y, dz/dt = xy − βz
    ///
    /// Each coordinate is advanced in turn and later coordinates see the
    /// already-updated earlier ones.
    pub fn step(&mut self, dt: f64) {
        self.x += SIGMA * (self.y - self.x) * dt;
        self.y += (self.x * (RHO - self.z) - self.y) * dt;
        self.z += (self.x * self.y - BETA * self.z) * dt;
    }
}

/// Integrate for `length * SUBSAMPLE` steps, keep x after every SUBSAMPLE-th
/// step, then min-max normalize to [-1, 1].
pub fn lorenz_series(length: usize) -> Vec<f64> {
    let mut state = LorenzState::default();
    let mut samples = Vec::with_capacity(length);

    for step in 0..length * SUBSAMPLE {
        state.step(DT);
        if step % SUBSAMPLE == 0 {
            samples.push(state.x);
        }
    }

    normalize_symmetric(&mut samples);
    samples
}

/// Map `values` onto [-1, 1] by min-max scaling. A flat series maps to zeros.
pub fn normalize_symmetric(values: &mut [f64]) {
    let min = values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let max = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let range = max - min;

    if range.is_nan() || range <= 0.0 {
        values.iter_mut().for_each(|v| *v = 0.0);
        return;
    }

    for v in values.iter_mut() {
        *v = (*v - min) / range * 2.0 - 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_step_from_initial_state() {
        let mut s = LorenzState::default();
        s.step(DT);

        // x stays at 1 (y == x), y = 1 + (1*27 - 1)*0.01, z uses the new x and y
        assert!((s.x - 1.0).abs() < 1e-12);
        assert!((s.y - 1.26).abs() < 1e-12);
        let expected_z = 1.0 + (1.0 * 1.26 - BETA * 1.0) * DT;
        assert!((s.z - expected_z).abs() < 1e-12);
    }

    #[test]
    fn test_series_length_and_bounds() {
        let series = lorenz_series(200);
        assert_eq!(series.len(), 200);

        let min = series.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = series.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!((min + 1.0).abs() < 1e-12);
        assert!((max - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_and_flat() {
        assert!(lorenz_series(0).is_empty());

        let mut flat = vec![3.0; 4];
        normalize_symmetric(&mut flat);
        assert_eq!(flat, vec![0.0; 4]);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(lorenz_series(50), lorenz_series(50));
    }
}

use super::*;
use crate::generative::{generate, SignalKind};
use crate::perceptual::DistanceMatrix;
use crate::pipeline::{analyze, EmbeddingParams};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_distance_matrix_symmetric_for_all_models() {
    let mut rng = StdRng::seed_from_u64(17);
    for &kind in SignalKind::all() {
        for &(m, tau) in &[(1usize, 1usize), (3, 1), (4, 3), (2, 7)] {
            let signal = generate(kind, 90, 0.05, 0.05, &mut rng);
            let dm = DistanceMatrix::build(&signal, m, tau);
            assert_eq!(dm.len(), 90 - (m - 1) * tau);

            for i in 0..dm.len() {
                assert_eq!(dm.get(i, i), 0.0);
                for j in (i + 1)..dm.len() {
                    assert_eq!(dm.get(i, j), dm.get(j, i));
                }
            }
        }
    }
}

#[test]
fn test_line_of_identity_always_recurrent() {
    let mut rng = StdRng::seed_from_u64(23);
    let signal = generate(SignalKind::Noise, 100, 0.05, 0.0, &mut rng);
    let dm = DistanceMatrix::build(&signal, 3, 1);

    for &threshold in &[1e-9, 0.01, 0.3, 1.0] {
        let plot = binarize(&dm, threshold);
        assert!((0..plot.len()).all(|i| plot.is_recurrent(i, i)));
    }
}

#[test]
fn test_constant_signal_any_threshold() {
    for &threshold in &[0.01, 0.3, 1.0] {
        let analysis = analyze(&[0.4; 60], &EmbeddingParams::new(3, 2, threshold));
        assert_eq!(analysis.metrics.rr, 1.0);
    }
}

#[test]
fn test_full_threshold_is_not_full_recurrence() {
    // eps is half the maximum distance, so the farthest pair never recurs
    let signal: Vec<f64> = (0..50).map(|i| (i as f64 * 0.4).sin()).collect();
    let analysis = analyze(&signal, &EmbeddingParams::new(2, 1, 1.0));
    assert!(analysis.metrics.rr < 1.0);
    assert!(analysis.metrics.rr > 0.0);
}

#[test]
fn test_metrics_bounded_for_all_models() {
    let mut rng = StdRng::seed_from_u64(31);
    for &kind in SignalKind::all() {
        let signal = generate(kind, 150, 0.05, 0.1, &mut rng);
        for &threshold in &[0.05, 0.3, 0.9] {
            let m = analyze(&signal, &EmbeddingParams::new(3, 2, threshold)).metrics;
            for v in [m.rr, m.det, m.lam] {
                assert!((0.0..=1.0).contains(&v), "{} at {}: {:?}", kind, threshold, m);
            }
        }
    }
}

#[test]
fn test_repeated_analysis_is_bit_identical() {
    let mut rng = StdRng::seed_from_u64(5);
    let signal = generate(SignalKind::Intermittent, 150, 0.05, 0.05, &mut rng);
    let params = EmbeddingParams::new(3, 2, 0.3);

    let first = analyze(&signal, &params);
    for _ in 0..3 {
        let again = analyze(&signal, &params);
        assert_eq!(again.distances, first.distances);
        assert_eq!(again.recurrence, first.recurrence);
        assert_eq!(again.metrics.rr.to_bits(), first.metrics.rr.to_bits());
        assert_eq!(again.metrics.det.to_bits(), first.metrics.det.to_bits());
        assert_eq!(again.metrics.lam.to_bits(), first.metrics.lam.to_bits());
    }
}

#[test]
fn test_sine_more_deterministic_than_noise() {
    let params = EmbeddingParams::new(3, 1, 0.3);

    for seed in 0..3 {
        let mut rng = StdRng::seed_from_u64(seed);
        let sine = generate(SignalKind::Sine, 150, 0.05, 0.02, &mut rng);
        let noise = generate(SignalKind::Noise, 150, 0.05, 0.0, &mut rng);

        let sine_det = analyze(&sine, &params).metrics.det;
        let noise_det = analyze(&noise, &params).metrics.det;

        assert!(
            sine_det > noise_det + 0.1,
            "seed {}: sine DET {} vs noise DET {}",
            seed,
            sine_det,
            noise_det
        );
    }
}

#[test]
fn test_periodic_orbit_is_laminar() {
    // A clean periodic orbit recurs in long bands, so nearly every
    // recurrent point sits on a vertical run.
    let signal: Vec<f64> = (0..150)
        .map(|i| (2.0 * std::f64::consts::PI * 0.05 * i as f64).sin())
        .collect();
    let m = analyze(&signal, &EmbeddingParams::default()).metrics;
    assert!(m.lam > 0.9);
}

#[test]
fn test_too_short_for_embedding() {
    let signal = vec![0.0, 1.0, 0.0, 1.0, 0.0];
    let analysis = analyze(&signal, &EmbeddingParams::new(3, 2, 0.3));
    assert_eq!(analysis.len(), 1);

    let analysis = analyze(&signal, &EmbeddingParams::new(3, 3, 0.3));
    assert!(analysis.is_empty());
    assert_eq!(analysis.metrics, RqaMetrics::default());
}

use approx::assert_abs_diff_eq;
use ordinal_rve::estimators::approaches::ordinal::shannon::PROBABILITY_FLOOR;
use ordinal_rve::normalized_shannon_entropy;

use crate::test_helpers::{Rng, SeedableRng, StdRng};

#[test]
fn uniform_histogram_has_unit_entropy() {
    for k in [2, 6, 24, 120] {
        assert_abs_diff_eq!(normalized_shannon_entropy(&vec![3.5; k]), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn dominated_histogram_has_near_zero_entropy() {
    let mut weights = vec![0.0; 120];
    weights[17] = 1.0;
    let h = normalized_shannon_entropy(&weights);
    // Only the floor contributes for the empty bins.
    let floor_term = -(119.0 * PROBABILITY_FLOOR * PROBABILITY_FLOOR.ln()) / 120f64.ln();
    assert_abs_diff_eq!(h, floor_term, epsilon = 1e-15);
    assert!(h < 1e-70);
}

#[test]
fn known_two_level_histogram() {
    // weights {2,1,1,1,1,1}: p = 2/7 once and 1/7 five times
    let weights = [1.0, 1.0, 2.0, 1.0, 1.0, 1.0];
    let expected = -((2.0 / 7.0) * (2.0f64 / 7.0).ln() + 5.0 * (1.0 / 7.0) * (1.0f64 / 7.0).ln())
        / 6f64.ln();
    assert_abs_diff_eq!(normalized_shannon_entropy(&weights), expected, epsilon = 1e-12);
}

#[test]
fn entropy_is_scale_free() {
    let weights = [0.2, 5.0, 1.3, 0.7];
    let scaled: Vec<f64> = weights.iter().map(|w| w * 1e-200).collect();
    assert_abs_diff_eq!(
        normalized_shannon_entropy(&weights),
        normalized_shannon_entropy(&scaled),
        epsilon = 1e-12
    );
}

#[test]
fn random_histograms_stay_in_unit_interval() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..2_000 {
        let k = rng.gen_range(2..=720);
        let weights: Vec<f64> = (0..k)
            .map(|_| {
                // Mix of tiny, zero and large weights.
                match rng.gen_range(0..4) {
                    0 => 0.0,
                    1 => rng.gen_range(0.0..1e-80),
                    _ => rng.gen_range(0.0..1e6),
                }
            })
            .collect();
        if weights.iter().all(|&w| w == 0.0) {
            continue;
        }
        let h = normalized_shannon_entropy(&weights);
        assert!((0.0..=1.0).contains(&h), "h={} for k={}", h, k);
    }
}

#[test]
fn degenerate_inputs_yield_zero() {
    assert_eq!(normalized_shannon_entropy(&[]), 0.0);
    assert_eq!(normalized_shannon_entropy(&[4.0]), 0.0);
    assert_eq!(normalized_shannon_entropy(&[0.0, 0.0, 0.0]), 0.0);
}

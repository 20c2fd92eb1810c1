// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Lower bound applied to each normalized probability before the logarithm.
pub const PROBABILITY_FLOOR: f64 = 1e-75;

/// Normalized Shannon entropy of a histogram, in `[0, 1]`.
///
/// `p_i = w_i / Σw` is clamped to [`PROBABILITY_FLOOR`], then
/// `H = −Σ p_i ln p_i` is divided by `ln K` for `K` bins. 0 means a single
/// class holds all the mass, 1 means a uniform distribution.
///
/// Returns 0.0 for fewer than two bins or a histogram with no positive mass.
pub fn normalized_shannon_entropy(weights: &[f64]) -> f64 {
    let k = weights.len();
    if k < 2 {
        return 0.0;
    }
    let total: f64 = weights.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        return 0.0;
    }
    let h: f64 = weights
        .iter()
        .map(|&w| {
            let p = (w / total).max(PROBABILITY_FLOOR);
            -p * p.ln()
        })
        .sum();
    (h / (k as f64).ln()).clamp(0.0, 1.0)
}

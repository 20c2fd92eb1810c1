// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::estimators::traits::PermutationClass;

/// Stored weights are renormalized once the pending scale exceeds this bound.
const RESCALE_THRESHOLD: f64 = 1e100;

/// Per-window forgetting factor `α = exp(−1 / (f·τ))`.
///
/// `0 < α < 1` for finite positive `f·τ`; `τ = ∞` gives `α = 1` (no decay).
pub fn decay_factor(sampling_frequency: f64, decay_time_constant: f64) -> f64 {
    (-1.0 / (sampling_frequency * decay_time_constant)).exp()
}

/// Exponentially forgetting histogram over permutation classes.
///
/// Every bin starts at 1.0 (a Laplace prior). Each update multiplies all
/// weights by `α` and then adds 1.0 to the observed class.
///
/// Decay is applied lazily: bins are kept relative to a running scale
/// `1/α^n`, so an update touches one bin. The stored values are proportional
/// to the true weights, which is all normalization needs.
#[derive(Debug, Clone)]
pub struct DecayedHistogram {
    stored: Vec<f64>,
    alpha: f64,
    // Weight of one fresh observation in stored units.
    inv_scale: f64,
    updates: usize,
}

impl DecayedHistogram {
    pub fn new(n_classes: usize, alpha: f64) -> Self {
        debug_assert!(alpha > 0.0 && alpha <= 1.0, "decay factor must lie in (0, 1]");
        Self {
            stored: vec![1.0; n_classes],
            alpha,
            inv_scale: 1.0,
            updates: 0,
        }
    }

    pub fn n_classes(&self) -> usize {
        self.stored.len()
    }

    pub fn decay_factor(&self) -> f64 {
        self.alpha
    }

    /// Number of windows absorbed so far.
    pub fn updates(&self) -> usize {
        self.updates
    }

    /// Decay every bin, then count one observation of `class`.
    ///
    /// Panics if `class` is outside `0..n_classes`.
    pub fn update(&mut self, class: PermutationClass) {
        self.inv_scale /= self.alpha;
        if self.inv_scale > RESCALE_THRESHOLD {
            self.rescale();
        }
        self.stored[class.index()] += self.inv_scale;
        self.updates += 1;
    }

    /// Bin values proportional to the true weights.
    ///
    /// Normalizing this slice gives the same distribution as normalizing
    /// [`weights`](Self::weights), without the extra pass.
    pub fn relative_weights(&self) -> &[f64] {
        &self.stored
    }

    /// True decayed weights.
    pub fn weights(&self) -> Vec<f64> {
        let scale = self.inv_scale.recip();
        self.stored.iter().map(|w| w * scale).collect()
    }

    /// Sum of the true decayed weights.
    pub fn total_weight(&self) -> f64 {
        self.stored.iter().sum::<f64>() / self.inv_scale
    }

    fn rescale(&mut self) {
        let scale = self.inv_scale.recip();
        for w in self.stored.iter_mut() {
            *w *= scale;
        }
        self.inv_scale = 1.0;
    }
}

// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

use ndarray::{Array1, ArrayView1};

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> f64;
}

pub trait LocalValues: GlobalValue {
    /// Compute and return the local values of the measure, one per window.
    fn local_values(&self) -> Array1<f64>;

    /// Derive global_value as the mean of local values.
    ///
    /// Returns NaN when there are no local values.
    fn global_from_local(&self) -> f64 {
        self.local_values().mean().unwrap_or(f64::NAN)
    }
}

/// Index of a rank ordering among the `m!` permutations of `{0, …, m−1}`.
///
/// Indices follow the lexicographic enumeration of permutations, which is the
/// same order as their Lehmer codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PermutationClass(pub usize);

impl PermutationClass {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PermutationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Maps a window of `m` samples to its permutation class.
///
/// Implementations may keep scratch buffers, hence `&mut self`. Every
/// implementation must use the same class indexing so strategies can be
/// swapped without changing results.
pub trait OrdinalClassifier {
    /// Embedding dimension m this classifier was built for.
    fn embedding_dimension(&self) -> usize;

    /// Number of permutation classes, `m!`.
    fn n_classes(&self) -> usize;

    /// Classify one window. Returns `None` if the rank pattern has no class,
    /// which only happens for a window of the wrong length.
    fn classify(&mut self, window: ArrayView1<'_, f64>) -> Option<PermutationClass>;

    /// Rank pattern (stable argsort) computed by the last call to `classify`.
    fn rank_pattern(&self) -> &[usize];
}

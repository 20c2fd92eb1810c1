// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordinal classification strategies.
//!
//! Both classifiers compute the stable argsort of a window and index it by
//! its lexicographic rank, so they agree on every input. They differ only in
//! how the rank is found.

use ndarray::ArrayView1;
use tracing::warn;

use crate::estimators::approaches::ordinal::ordinal_utils::{
    argsort, factorial, factorial_table, lehmer_code_with_fact, lexicographic_permutations,
};
use crate::estimators::traits::{OrdinalClassifier, PermutationClass};

/// Beyond this order a linear scan over `m!` candidates dominates runtime.
pub const TABLE_SCAN_MAX_ORDER: usize = 7;

/// Computes the class directly from the Lehmer code of the rank pattern.
///
/// O(m log m + m²) per window, independent of `m!`.
#[derive(Debug, Clone)]
pub struct LehmerClassifier {
    order: usize,
    n_classes: usize,
    fact: Vec<u128>,
    idx: Vec<usize>,
}

impl LehmerClassifier {
    pub fn new(order: usize) -> Self {
        Self {
            order,
            n_classes: factorial(order),
            fact: factorial_table(order),
            idx: (0..order).collect(),
        }
    }
}

impl OrdinalClassifier for LehmerClassifier {
    fn embedding_dimension(&self) -> usize {
        self.order
    }

    fn n_classes(&self) -> usize {
        self.n_classes
    }

    fn classify(&mut self, window: ArrayView1<'_, f64>) -> Option<PermutationClass> {
        if window.len() != self.order {
            return None;
        }
        argsort(window, &mut self.idx);
        let code = lehmer_code_with_fact(&self.idx, &self.fact) as usize;
        (code < self.n_classes).then_some(PermutationClass(code))
    }

    fn rank_pattern(&self) -> &[usize] {
        &self.idx
    }
}

/// Matches the rank pattern against a fixed enumeration of all `m!`
/// permutations.
///
/// The enumeration is built once at construction and never changes, so class
/// indices are stable for the whole run. Only sensible for small orders.
#[derive(Debug, Clone)]
pub struct PermutationTableClassifier {
    order: usize,
    table: Vec<Vec<usize>>,
    idx: Vec<usize>,
}

impl PermutationTableClassifier {
    pub fn new(order: usize) -> Self {
        if order > TABLE_SCAN_MAX_ORDER {
            warn!(
                order,
                n_classes = factorial(order),
                "permutation table scan is slow for this order; prefer LehmerClassifier"
            );
        }
        Self {
            order,
            table: lexicographic_permutations(order),
            idx: (0..order).collect(),
        }
    }

    /// The fixed enumeration; entry `k` is class `k`.
    pub fn permutations(&self) -> &[Vec<usize>] {
        &self.table
    }
}

impl OrdinalClassifier for PermutationTableClassifier {
    fn embedding_dimension(&self) -> usize {
        self.order
    }

    fn n_classes(&self) -> usize {
        self.table.len()
    }

    fn classify(&mut self, window: ArrayView1<'_, f64>) -> Option<PermutationClass> {
        if window.len() != self.order {
            return None;
        }
        argsort(window, &mut self.idx);
        self.table
            .iter()
            .position(|perm| *perm == self.idx)
            .map(PermutationClass)
    }

    fn rank_pattern(&self) -> &[usize] {
        &self.idx
    }
}

// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::ArrayView1;

/// Stable argsort for f64 values.
///
/// Fills `idx` with the indices that would sort `window` in ascending order.
/// Ties are resolved by original index order (earlier index first), matching
/// numpy.argsort(kind="stable"). NaNs sort after every number.
pub fn argsort(window: ArrayView1<'_, f64>, idx: &mut [usize]) {
    for (i, val) in idx.iter_mut().enumerate() {
        *val = i;
    }
    idx.sort_by(|&i, &j| {
        let a = window[i];
        let b = window[j];
        match a.partial_cmp(&b) {
            Some(core::cmp::Ordering::Equal) => i.cmp(&j),
            Some(ord) => ord,
            None => {
                if a.is_nan() && b.is_nan() {
                    i.cmp(&j)
                } else if a.is_nan() {
                    core::cmp::Ordering::Greater
                } else {
                    core::cmp::Ordering::Less
                }
            }
        }
    });
}

/// `n!` as usize. Panics on overflow (n > 20 on 64-bit targets).
pub fn factorial(n: usize) -> usize {
    (1..=n)
        .try_fold(1usize, |acc, k| acc.checked_mul(k))
        .expect("factorial overflows usize")
}

/// Factorial weights `[0!, 1!, …, (n−1)!]` used by the Lehmer code.
pub fn factorial_table(n: usize) -> Vec<u128> {
    let mut fact: Vec<u128> = vec![1u128; n];
    for i in 1..n {
        fact[i] = fact[i - 1] * (i as u128);
    }
    fact
}

/// Compute the Lehmer code (factoradic rank) of a permutation.
///
/// The rank equals the permutation's position in the lexicographic
/// enumeration of all permutations of `0..m`, so it can be used directly as a
/// histogram index.
///
/// Panics if m > 20 (u64 overflow risk for factorial weights).
pub fn lehmer_code(perm: &[usize]) -> u64 {
    let n = perm.len();
    if n > 20 {
        panic!("For embedding dimensions larger than 20, the integer will be too large for u64.");
    }
    lehmer_code_with_fact(perm, &factorial_table(n))
}

/// Lehmer code with precomputed factorial weights (hot path).
pub(crate) fn lehmer_code_with_fact(perm: &[usize], fact: &[u128]) -> u64 {
    let n = perm.len();
    let mut acc: u128 = 0;
    for i in 0..n {
        let smaller_after = perm[i + 1..].iter().filter(|&&p| p < perm[i]).count() as u128;
        acc += smaller_after * fact[n - 1 - i];
    }
    acc as u64
}

/// All permutations of `0..m` in lexicographic order.
///
/// Entry `k` has Lehmer code `k`.
pub fn lexicographic_permutations(m: usize) -> Vec<Vec<usize>> {
    let mut current: Vec<usize> = (0..m).collect();
    let mut out = Vec::with_capacity(factorial(m));
    loop {
        out.push(current.clone());
        if !next_permutation(&mut current) {
            return out;
        }
    }
}

/// Advance `perm` to its lexicographic successor. Returns false at the last one.
fn next_permutation(perm: &mut [usize]) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }
    let Some(pivot) = (0..n - 1).rev().find(|&i| perm[i] < perm[i + 1]) else {
        return false;
    };
    let successor = (pivot + 1..n)
        .rev()
        .find(|&j| perm[j] > perm[pivot])
        .unwrap_or(pivot + 1);
    perm.swap(pivot, successor);
    perm[pivot + 1..].reverse();
    true
}

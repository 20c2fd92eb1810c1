// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashSet;

use ordinal_rve::estimators::approaches::ordinal::ordinal_utils::{
    factorial, lehmer_code, lexicographic_permutations,
};

#[test]
fn test_lehmer_code() {
    // Empty slice should result in 0
    assert_eq!(lehmer_code(&[]), 0);
    // Identity permutations should result in 0; reversed ones in (n!-1)
    for n in 1..=20 {
        let perm: Vec<usize> = (0..n).collect();
        let perm_reversed: Vec<usize> = perm.iter().rev().copied().collect();
        assert_eq!(lehmer_code(&perm), 0, "identity permutation mismatch for n={}", n);

        let expected_fact: u64 = (1..=n as u64).product();
        assert_eq!(
            lehmer_code(&perm_reversed),
            expected_fact - 1,
            "reversed permutation mismatch for n={}",
            n
        );
    }
    assert_eq!(lehmer_code(&[1, 0]), 1);
    assert_eq!(lehmer_code(&[0, 1, 2, 3, 4, 5, 7, 6]), 1);
    assert_eq!(lehmer_code(&[0, 1, 3, 2, 4, 5, 6, 7]), 120);

    // Known values for n=3
    assert_eq!(lehmer_code(&[0, 2, 1]), 1);
    assert_eq!(lehmer_code(&[1, 0, 2]), 2);
    assert_eq!(lehmer_code(&[1, 2, 0]), 3);
    assert_eq!(lehmer_code(&[2, 0, 1]), 4);
    assert_eq!(lehmer_code(&[2, 1, 0]), 5);
}

#[test]
#[should_panic(expected = "For embedding dimensions larger than 20")]
fn test_lehmer_code_overflow_panic() {
    let perm: Vec<usize> = (0..21).collect();
    lehmer_code(&perm);
}

#[test]
fn test_factorial_small_values() {
    assert_eq!(factorial(0), 1);
    assert_eq!(factorial(1), 1);
    assert_eq!(factorial(5), 120);
    assert_eq!(factorial(10), 3_628_800);
}

#[test]
fn lexicographic_enumeration_has_m_factorial_distinct_members() {
    for m in 2..=7 {
        let perms = lexicographic_permutations(m);
        assert_eq!(perms.len(), factorial(m), "m={}", m);
        let distinct: HashSet<&Vec<usize>> = perms.iter().collect();
        assert_eq!(distinct.len(), perms.len(), "duplicate permutation for m={}", m);
    }
}

#[test]
fn lexicographic_position_equals_lehmer_code() {
    for m in 2..=6 {
        for (k, perm) in lexicographic_permutations(m).iter().enumerate() {
            assert_eq!(lehmer_code(perm) as usize, k, "perm={:?}", perm);
        }
    }
}

#[test]
fn lexicographic_enumeration_order_for_three() {
    let perms = lexicographic_permutations(3);
    assert_eq!(
        perms,
        vec![
            vec![0, 1, 2],
            vec![0, 2, 1],
            vec![1, 0, 2],
            vec![1, 2, 0],
            vec![2, 0, 1],
            vec![2, 1, 0],
        ]
    );
}

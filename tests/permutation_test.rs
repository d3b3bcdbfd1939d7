// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the permutation codec.
//!
//! These tests validate that:
//! - encode and decode are inverse bijections for every n up to 8
//! - known indices decode to the expected permutations
//! - out-of-range input is rejected
//! - shuffles preserve the multiset and are reproducible from a seed

use std::collections::HashSet;

use blog_kernels::permutation::{decode, encode, factorial, permutations, shuffle, Permutation};
use blog_kernels::Error;
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_factorial_values() {
    assert_eq!(factorial(0), BigUint::from(1u32));
    assert_eq!(factorial(1), BigUint::from(1u32));
    assert_eq!(factorial(5), BigUint::from(120u32));
    assert_eq!(factorial(10), BigUint::from(3_628_800u32));
}

#[test]
fn test_known_decodings() {
    assert_eq!(decode(&BigUint::from(0u32), 3).unwrap(), vec![0, 1, 2]);
    assert_eq!(decode(&BigUint::from(5u32), 3).unwrap(), vec![2, 1, 0]);
}

#[test]
fn test_decode_then_encode_is_identity() {
    for n in 0..=8 {
        let total = factorial(n).to_usize().unwrap();
        for i in 0..total {
            let index = BigUint::from(i);
            let permutation = decode(&index, n).unwrap();
            assert_eq!(encode(&permutation).unwrap(), index, "n={} i={}", n, i);
        }
    }
}

#[test]
fn test_encode_then_decode_is_identity() {
    // every permutation of size n appears exactly once, each with a distinct index
    for n in 0..=8 {
        let mut seen = HashSet::new();
        for permutation in permutations(n) {
            let index = encode(permutation.as_slice()).unwrap();
            assert!(index < factorial(n));
            assert_eq!(decode(&index, n).unwrap(), permutation.as_slice());
            assert!(seen.insert(permutation.into_inner()));
        }
        assert_eq!(BigUint::from(seen.len()), factorial(n));
    }
}

#[test]
fn test_decode_out_of_range() {
    for n in 0..=8 {
        let result = decode(&factorial(n), n);
        assert!(
            matches!(result, Err(Error::IndexOutOfRange { size, .. }) if size == n),
            "n={} accepted n!",
            n
        );
    }
}

#[test]
fn test_encode_invalid_input() {
    assert!(matches!(
        encode(&[0, 2]),
        Err(Error::ValueOutOfRange { value: 2, .. })
    ));
    assert!(matches!(
        encode(&[0, 0]),
        Err(Error::RepeatedValue { value: 0, .. })
    ));
}

#[test]
fn test_shuffle_preserves_multiset() {
    let mut rng = StdRng::seed_from_u64(2024);
    let inputs: Vec<Vec<char>> = vec![
        vec![],
        vec!['x'],
        vec!['a', 'b'],
        "mississippi".chars().collect(),
    ];
    for input in inputs {
        for _ in 0..20 {
            let mut shuffled = shuffle(&input, &mut rng);
            let mut expected = input.clone();
            shuffled.sort();
            expected.sort();
            assert_eq!(shuffled, expected);
        }
    }
}

#[test]
fn test_shuffle_reproducible_from_seed() {
    let items: Vec<u32> = (0..8).collect();
    let first = shuffle(&items, &mut StdRng::seed_from_u64(5));
    let second = shuffle(&items, &mut StdRng::seed_from_u64(5));
    assert_eq!(first, second);
}

#[test]
fn test_random_permutation_round_trips() {
    let mut rng = StdRng::seed_from_u64(17);
    for n in [1, 5, 20, 40] {
        let p = Permutation::random(n, &mut rng);
        assert_eq!(Permutation::from_index(&p.index(), n).unwrap(), p);
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lehmer code: ranking and unranking permutations.
//!
//! A permutation of `0..n` is identified with an integer in `[0, n!)` by
//! writing it in the factorial number system. Position `i` contributes
//! `rank * (n - 1 - i)!`, where `rank` counts the values smaller than the
//! element at `i` that have not appeared to its left.
//!
//! Indices are ordered lexicographically: `0` is the identity and `n! - 1`
//! is the reversal.
//!
//! ```text
//! n = 3:  0 [0,1,2]  1 [0,2,1]  2 [1,0,2]  3 [1,2,0]  4 [2,0,1]  5 [2,1,0]
//! ```

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::error::{Error, Result};
use crate::permutation::factorial;

/// Check that `values` holds every integer in `0..values.len()` exactly once.
pub fn validate(values: &[usize]) -> Result<()> {
    let size = values.len();
    let mut seen = vec![false; size];
    for (position, &value) in values.iter().enumerate() {
        if value >= size {
            return Err(Error::ValueOutOfRange {
                value,
                position,
                size,
            });
        }
        if seen[value] {
            return Err(Error::RepeatedValue { value, position });
        }
        seen[value] = true;
    }
    Ok(())
}

/// Rank of a permutation of `0..n` in `[0, n!)`.
///
/// Fails with [`Error::ValueOutOfRange`] or [`Error::RepeatedValue`] if the
/// input is not a permutation.
///
/// # Examples
///
/// ```
/// use blog_kernels::permutation::encode;
/// use num_bigint::BigUint;
///
/// assert_eq!(encode(&[0, 1, 2]).unwrap(), BigUint::from(0u32));
/// assert_eq!(encode(&[2, 1, 0]).unwrap(), BigUint::from(5u32));
/// ```
pub fn encode(permutation: &[usize]) -> Result<BigUint> {
    validate(permutation)?;
    Ok(rank_unchecked(permutation))
}

/// Rank of an already-validated permutation.
pub(crate) fn rank_unchecked(permutation: &[usize]) -> BigUint {
    let n = permutation.len();
    let mut used = vec![false; n];
    let mut index = BigUint::zero();

    // Horner form of sum(rank_i * (n - 1 - i)!): the radix at position i is n - i.
    for (i, &value) in permutation.iter().enumerate() {
        let rank = used[..value].iter().filter(|&&u| !u).count();
        used[value] = true;
        index = index * (n - i) + rank;
    }
    index
}

/// The permutation of `0..n` whose rank is `index`.
///
/// Fails with [`Error::IndexOutOfRange`] unless `index < n!`.
///
/// # Examples
///
/// ```
/// use blog_kernels::permutation::decode;
/// use num_bigint::BigUint;
///
/// assert_eq!(decode(&BigUint::from(5u32), 3).unwrap(), vec![2, 1, 0]);
/// assert!(decode(&BigUint::from(6u32), 3).is_err());
/// ```
pub fn decode(index: &BigUint, n: usize) -> Result<Vec<usize>> {
    let mut weight = factorial(n);
    if *index >= weight {
        return Err(Error::IndexOutOfRange {
            index: index.clone(),
            size: n,
        });
    }

    let mut available: Vec<usize> = (0..n).collect();
    let mut remainder = index.clone();
    let mut permutation = Vec::with_capacity(n);
    for remaining in (1..=n).rev() {
        // weight goes from n! to (remaining - 1)!
        weight /= remaining;
        let rank = (&remainder / &weight)
            .to_usize()
            .filter(|&rank| rank < remaining)
            .ok_or_else(|| Error::IndexOutOfRange {
                index: index.clone(),
                size: n,
            })?;
        remainder %= &weight;
        permutation.push(available.remove(rank));
    }
    Ok(permutation)
}

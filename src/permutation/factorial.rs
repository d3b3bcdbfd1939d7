// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Arbitrary-precision factorials.

use num_bigint::BigUint;
use num_traits::One;

/// Compute `n!`.
///
/// `factorial(0)` is 1. The result overflows `u64` from `n = 21`, so it is
/// returned as a [`BigUint`].
///
/// # Examples
///
/// ```
/// use blog_kernels::permutation::factorial;
/// use num_bigint::BigUint;
///
/// assert_eq!(factorial(5), BigUint::from(120u32));
/// assert_eq!(factorial(0), BigUint::from(1u32));
/// ```
pub fn factorial(n: usize) -> BigUint {
    (1..=n).fold(BigUint::one(), |acc, k| acc * k)
}

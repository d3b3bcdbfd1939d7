// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Permutations and their factorial-number-system indices.
//!
//! ## Module Structure
//!
//! - `factorial`: arbitrary-precision `n!`
//! - `lehmer`: `encode`/`decode` between permutations and `[0, n!)`
//! - `shuffle`: Fisher–Yates with an injected random source
//! - `mod`: the validated [`Permutation`] type and enumeration in index order

pub mod factorial;
pub mod lehmer;
pub mod shuffle;

pub use factorial::factorial;
pub use lehmer::{decode, encode, validate};
pub use shuffle::shuffle;

use std::fmt;

use num_bigint::BigUint;
use num_traits::One;
use rand::Rng;

use crate::error::Result;

/// A sequence holding every value of `0..n` exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// Validate `values` as a permutation of `0..values.len()`.
    pub fn new(values: Vec<usize>) -> Result<Self> {
        validate(&values)?;
        Ok(Self(values))
    }

    /// `[0, 1, ..., n - 1]`, the permutation with index 0.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// The permutation of size `n` with the given index.
    pub fn from_index(index: &BigUint, n: usize) -> Result<Self> {
        decode(index, n).map(Self)
    }

    /// A uniformly random permutation of size `n`.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        Self(shuffle(Self::identity(n).as_slice(), rng))
    }

    /// Index of this permutation in `[0, n!)`.
    pub fn index(&self) -> BigUint {
        lehmer::rank_unchecked(&self.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = crate::Error;

    fn try_from(values: Vec<usize>) -> Result<Self> {
        Self::new(values)
    }
}

impl AsRef<[usize]> for Permutation {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for Permutation {
    /// Format as "[2, 0, 1]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Iterate over every permutation of size `n` in index order.
///
/// Yields `n!` items, so keep `n` small.
pub fn permutations(n: usize) -> Permutations {
    Permutations {
        n,
        next: BigUint::default(),
        end: factorial(n),
    }
}

/// Iterator returned by [`permutations`].
#[derive(Debug, Clone)]
pub struct Permutations {
    n: usize,
    next: BigUint,
    end: BigUint,
}

impl Iterator for Permutations {
    type Item = Permutation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let permutation = Permutation::from_index(&self.next, self.n).ok()?;
        self.next += BigUint::one();
        Some(permutation)
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Uniform random reordering.

use rand::Rng;

/// Return a uniformly random reordering of `items`.
///
/// Fisher–Yates over a copy: for `i` from the last index down to 1, swap
/// position `i` with a position drawn uniformly from `0..=i`. Given an
/// unbiased `rng`, each of the `n!` orderings is equally likely. The input
/// slice is left untouched.
///
/// # Examples
///
/// ```
/// use blog_kernels::permutation::shuffle;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut shuffled = shuffle(&['a', 'b', 'c'], &mut rng);
/// shuffled.sort();
/// assert_eq!(shuffled, vec!['a', 'b', 'c']);
/// ```
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_trivial_inputs() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(shuffle::<u8, _>(&[], &mut rng), Vec::<u8>::new());
        assert_eq!(shuffle(&[42], &mut rng), vec![42]);
    }

    #[test]
    fn test_input_not_mutated() {
        let mut rng = StdRng::seed_from_u64(2);
        let items: Vec<u32> = (0..20).collect();
        let shuffled = shuffle(&items, &mut rng);
        assert_eq!(items, (0..20).collect::<Vec<_>>());
        let mut sorted = shuffled.clone();
        sorted.sort();
        assert_eq!(sorted, items);
    }

    #[test]
    fn test_same_seed_same_order() {
        let items: Vec<u32> = (0..10).collect();
        let a = shuffle(&items, &mut StdRng::seed_from_u64(99));
        let b = shuffle(&items, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_orderings_reachable() {
        // 3! orderings; 600 draws should hit every one of them
        let mut rng = StdRng::seed_from_u64(3);
        let mut counts = [0usize; 6];
        for _ in 0..600 {
            let shuffled = shuffle(&[0usize, 1, 2], &mut rng);
            let index = crate::permutation::encode(&shuffled).unwrap();
            counts[num_traits::ToPrimitive::to_usize(&index).unwrap()] += 1;
        }
        assert!(counts.iter().all(|&c| c > 50), "skewed counts {:?}", counts);
    }
}

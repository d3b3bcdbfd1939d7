// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! KMP prefix (failure) function.
//!
//! `table[i]` is the length of the longest proper border of `pattern[..=i]`,
//! i.e. the longest string that is both a proper prefix and a suffix of it.
//! A KMP scan falls back to `table[k - 1]` after a mismatch at pattern
//! position `k`.

/// Prefix table of an arbitrary symbol sequence.
///
/// Runs in linear time: `k` grows by at most one per position and every
/// fallback shrinks it.
pub fn prefix_table<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut k = 0;
    for i in 1..pattern.len() {
        while k > 0 && pattern[k] != pattern[i] {
            k = table[k - 1];
        }
        if pattern[k] == pattern[i] {
            k += 1;
        }
        table[i] = k;
    }
    table
}

/// Prefix table of a string, one entry per UTF-16 code unit.
///
/// Code units match how the blog's pattern-matching widgets index their
/// letters, so every character outside the BMP occupies two entries.
///
/// # Examples
///
/// ```
/// use blog_kernels::strings::compute_prefix_table;
///
/// assert_eq!(compute_prefix_table("ababaca"), vec![0, 0, 1, 2, 3, 0, 1]);
/// assert!(compute_prefix_table("").is_empty());
/// ```
pub fn compute_prefix_table(pattern: &str) -> Vec<usize> {
    let units: Vec<u16> = pattern.encode_utf16().collect();
    prefix_table(&units)
}

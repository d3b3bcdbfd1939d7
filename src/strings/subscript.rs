// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Subscript digits for labels such as `x₁`.

const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

/// Render `n` with Unicode subscript digits.
///
/// Zero renders as the empty string, so `format!("x{}", to_subscript(0))`
/// is a bare `x`.
///
/// # Examples
///
/// ```
/// use blog_kernels::strings::to_subscript;
///
/// assert_eq!(to_subscript(12), "₁₂");
/// assert_eq!(to_subscript(0), "");
/// ```
pub fn to_subscript(n: u64) -> String {
    if n == 0 {
        return String::new();
    }
    n.to_string()
        .bytes()
        .map(|digit| SUBSCRIPT_DIGITS[usize::from(digit - b'0')])
        .collect()
}

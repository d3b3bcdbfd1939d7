// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! String kernels for the pattern-matching posts.
//!
//! - `prefix`: the KMP prefix table
//! - `subscript`: subscript-digit labels

pub mod prefix;
pub mod subscript;

pub use prefix::{compute_prefix_table, prefix_table};
pub use subscript::to_subscript;

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pure computation kernels behind the blog's interactive posts.
//!
//! The presentation layer (Markdown, routing, the Svelte widgets) calls into
//! these kernels and renders what they return. Nothing here does I/O or keeps
//! state between calls.
//!
//! # Kernels
//!
//! - [`permutation`]: ranks permutations in the factorial number system
//!   (Lehmer code) and shuffles with an injected random source
//! - [`strings`]: the KMP prefix table, plus subscript labels
//! - [`graph`]: Prim's minimum spanning tree, observable step by step
//! - [`logic`]: the sixteen two-input boolean gates
//!
//! # Errors
//!
//! Invalid input is reported as an [`Error`]; every variant names the
//! offending argument. A disconnected graph is not an error: Prim's search
//! spans the start vertex's component only.
//!
//! # References
//!
//! - Knuth, D. E. *The Art of Computer Programming*, Vol. 2, §3.4.2 (random
//!   permutations) and Vol. 3, §5.1.1 (inversion tables).
//! - Knuth, D. E., Morris, J. H., Pratt, V. R. (1977). "Fast pattern matching
//!   in strings." SIAM Journal on Computing 6(2).
//! - Prim, R. C. (1957). "Shortest connection networks and some
//!   generalizations." Bell System Technical Journal 36(6).

pub mod error;
pub mod graph;
pub mod logic;
pub mod permutation;
pub mod strings;

// Re-export commonly used items
pub use error::{Error, Result};
pub use graph::{run_prim, Graph, MstResult};
pub use permutation::{decode, encode, factorial, shuffle, Permutation};
pub use strings::compute_prefix_table;

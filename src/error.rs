// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error type shared by the kernels.
//!
//! Every variant is an invalid-argument condition: the kernels never fail on
//! well-formed input, so an `Error` always points at something the caller
//! passed in.

use num_bigint::BigUint;

use crate::graph::{EdgeId, VertexId};

/// Invalid input to one of the kernels.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A permutation index at or beyond `size!`.
    #[error("index {index} is out of range for permutations of size {size} (must be < {size}!)")]
    IndexOutOfRange { index: BigUint, size: usize },

    /// A permutation entry that is not in `0..size`.
    #[error("value {value} at position {position} is out of range for a permutation of size {size}")]
    ValueOutOfRange {
        value: usize,
        position: usize,
        size: usize,
    },

    /// A permutation entry that already appeared earlier in the sequence.
    #[error("value {value} at position {position} is repeated")]
    RepeatedValue { value: usize, position: usize },

    /// An edge or start vertex naming a vertex the graph does not have.
    #[error("vertex {vertex} is not in the graph{}", referenced_by(.edge))]
    UnknownVertex {
        vertex: VertexId,
        edge: Option<EdgeId>,
    },

    /// Two vertices sharing one identifier.
    #[error("vertex {vertex} appears more than once")]
    DuplicateVertex { vertex: VertexId },

    /// An edge weight that is negative, infinite or NaN.
    #[error("edge {edge} has invalid weight {weight} (weights must be finite and non-negative)")]
    InvalidWeight { edge: EdgeId, weight: f64 },

    /// An edge whose two endpoints are the same vertex.
    #[error("edge {edge} is a self-loop on vertex {vertex}")]
    SelfLoop { edge: EdgeId, vertex: VertexId },
}

fn referenced_by(edge: &Option<EdgeId>) -> String {
    match edge {
        Some(edge) => format!(" (referenced by edge {edge})"),
        None => String::new(),
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

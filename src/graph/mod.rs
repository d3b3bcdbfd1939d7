// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Weighted undirected graphs and Prim's minimum spanning tree.
//!
//! ## Module Structure
//!
//! - `types`: Vertex, Edge and the validated Graph
//! - `prim`: the step-by-step Prim's search and its result
//! - `sample`: the graph drawn in the Christofides post

pub mod prim;
pub mod sample;
pub mod types;

pub use prim::{run_prim, MstResult, Prim, PrimStep};
pub use sample::{sample_graph, Point, SAMPLE_MST_WEIGHT};
pub use types::{Edge, EdgeId, Graph, GraphParts, Vertex, VertexId};

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Naive Prim's algorithm, one observable step at a time.
//!
//! # State
//!
//! - `visited`: vertices already in the tree, in discovery order
//! - `frontier`: a multiset of edge ids, in insertion order
//!
//! Initially nothing is visited and the frontier holds the edges touching the
//! start vertex. Each step selects the cheapest frontier edge (the earliest
//! one on ties), visits each of its endpoints that is new (source first),
//! appends every edge touching a newly visited vertex to the frontier, and
//! then removes all copies of the selected edge. The edge joins the tree iff
//! it brought in at least one vertex; an edge whose endpoints are both
//! visited would close a cycle and is discarded.
//!
//! The search ends when the frontier is empty. Only the start vertex's
//! component is spanned.
//!
//! # Example
//!
//! ```
//! use blog_kernels::graph::{run_prim, Edge, Graph, Vertex};
//!
//! let graph = Graph::new(
//!     vec![Vertex::bare(1), Vertex::bare(2), Vertex::bare(3)],
//!     vec![Edge::new(1, 2, 5.0), Edge::new(2, 3, 1.0), Edge::new(1, 3, 2.0)],
//! )
//! .unwrap();
//!
//! let mst = run_prim(&graph, None).unwrap();
//! assert_eq!(mst.edges, vec![2, 1]);
//! assert_eq!(mst.vertices, vec![1, 3, 2]);
//! assert_eq!(mst.total_weight, 3.0);
//! ```

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::graph::{EdgeId, Graph, VertexId};

/// The spanning tree found by [`run_prim`].
///
/// Replaces in-place highlighting: the caller overlays these ids onto its own
/// render state.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MstResult {
    /// The vertex the search started from, `None` for an empty graph.
    pub start: Option<VertexId>,
    /// Visited vertices, in discovery order.
    pub vertices: Vec<VertexId>,
    /// Tree edges, in the order they were selected.
    pub edges: Vec<EdgeId>,
    pub total_weight: f64,
}

impl MstResult {
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains(&id)
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains(&id)
    }

    /// One flag per vertex of `graph`, in its vertex order.
    pub fn vertex_flags<L>(&self, graph: &Graph<L>) -> Vec<bool> {
        graph
            .vertices()
            .iter()
            .map(|v| self.contains_vertex(v.id))
            .collect()
    }

    /// One flag per edge of `graph`, in its edge order.
    pub fn edge_flags<L>(&self, graph: &Graph<L>) -> Vec<bool> {
        (0..graph.edges().len())
            .map(|id| self.contains_edge(id))
            .collect()
    }

    /// Check whether the tree reaches every vertex of `graph`.
    pub fn is_spanning<L>(&self, graph: &Graph<L>) -> bool {
        graph.vertices().iter().all(|v| self.contains_vertex(v.id))
    }
}

/// What happened during one step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimStep {
    /// The cheapest frontier edge, the one examined by this step.
    pub edge: EdgeId,
    /// Whether the edge joined the tree.
    pub in_tree: bool,
    /// Vertices visited by this step (zero, one or two).
    pub discovered: Vec<VertexId>,
    /// The frontier once the step is done.
    pub frontier: Vec<EdgeId>,
}

/// A running Prim's search over a borrowed graph.
///
/// Drive it with [`Prim::step`] (or as an iterator) to animate the search,
/// or call [`Prim::finish`] to run it to completion.
#[derive(Debug, Clone)]
pub struct Prim<'g, L> {
    graph: &'g Graph<L>,
    visited: HashSet<VertexId>,
    frontier: Vec<EdgeId>,
    result: MstResult,
}

impl<'g, L> Prim<'g, L> {
    /// Set up a search from `start`, or from the first vertex if `None`.
    ///
    /// Fails with [`Error::UnknownVertex`] if `start` is not in the graph.
    /// Nothing is visited up front: the start vertex is visited by its first
    /// frontier edge, so a start without edges leaves the search empty.
    pub fn new(graph: &'g Graph<L>, start: Option<VertexId>) -> Result<Self> {
        let start = match start {
            Some(id) if graph.contains_vertex(id) => Some(id),
            Some(id) => {
                return Err(Error::UnknownVertex {
                    vertex: id,
                    edge: None,
                })
            }
            None => graph.vertices().first().map(|v| v.id),
        };
        let frontier = match start {
            Some(id) => graph.incident_edges(id).collect(),
            None => Vec::new(),
        };
        Ok(Self {
            graph,
            visited: HashSet::new(),
            frontier,
            result: MstResult {
                start,
                ..MstResult::default()
            },
        })
    }

    /// The current frontier, in insertion order.
    pub fn frontier(&self) -> &[EdgeId] {
        &self.frontier
    }

    /// Vertices visited so far, in discovery order.
    pub fn visited(&self) -> &[VertexId] {
        &self.result.vertices
    }

    /// The tree built so far.
    pub fn result(&self) -> &MstResult {
        &self.result
    }

    pub fn is_done(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Examine the cheapest frontier edge. Returns `None` once the frontier is
    /// empty.
    pub fn step(&mut self) -> Option<PrimStep> {
        let edge_id = self.cheapest()?;
        let edge = *self.graph.edge(edge_id)?;

        let mut discovered = Vec::with_capacity(2);
        for endpoint in edge.endpoints() {
            if self.visited.insert(endpoint) {
                discovered.push(endpoint);
                self.frontier.extend(self.graph.incident_edges(endpoint));
            }
        }

        let in_tree = !discovered.is_empty();
        if in_tree {
            self.result.edges.push(edge_id);
            self.result.total_weight += edge.weight;
            self.result.vertices.extend_from_slice(&discovered);
        }
        self.frontier.retain(|&id| id != edge_id);

        Some(PrimStep {
            edge: edge_id,
            in_tree,
            discovered,
            frontier: self.frontier.clone(),
        })
    }

    /// Run the remaining steps and return the tree.
    pub fn finish(mut self) -> MstResult {
        while self.step().is_some() {}
        self.result
    }

    /// Earliest frontier edge of minimum weight.
    fn cheapest(&self) -> Option<EdgeId> {
        let weight = |id: EdgeId| self.graph.edge(id).map_or(f64::INFINITY, |e| e.weight);
        let mut best = *self.frontier.first()?;
        for &id in &self.frontier[1..] {
            if weight(id) < weight(best) {
                best = id;
            }
        }
        Some(best)
    }
}

impl<L> Iterator for Prim<'_, L> {
    type Item = PrimStep;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}

/// Minimum spanning tree of the start vertex's component.
///
/// `start` defaults to the first vertex of the graph. Fails with
/// [`Error::UnknownVertex`] if `start` names a missing vertex; a disconnected
/// graph is not an error.
///
/// Vertices are visited only through edges. A start vertex with no incident
/// edges, such as the only vertex of a one-vertex graph, gives an empty
/// `vertices` list and no tree edges.
pub fn run_prim<L>(graph: &Graph<L>, start: Option<VertexId>) -> Result<MstResult> {
    Ok(Prim::new(graph, start)?.finish())
}

impl<L> Graph<L> {
    /// Shorthand for [`run_prim`].
    pub fn minimum_spanning_tree(&self, start: Option<VertexId>) -> Result<MstResult> {
        run_prim(self, start)
    }
}

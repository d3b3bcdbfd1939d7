// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Vertices, weighted edges and the validated graph that holds them.

use crate::error::{Error, Result};

/// Identifier of a vertex, unique within its graph.
///
/// Identifiers come from the caller (the blog's sample graph numbers its
/// vertices from 1) and need not be contiguous.
pub type VertexId = usize;

/// Position of an edge in its graph's edge list.
pub type EdgeId = usize;

/// A vertex with opaque layout data.
///
/// The algorithms never look at `layout`; it travels with the vertex so the
/// presentation layer can keep coordinates, labels or colors alongside.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex<L = ()> {
    pub id: VertexId,
    pub layout: L,
}

impl<L> Vertex<L> {
    pub fn new(id: VertexId, layout: L) -> Self {
        Self { id, layout }
    }
}

impl Vertex {
    /// A vertex without layout data.
    pub fn bare(id: VertexId) -> Self {
        Self { id, layout: () }
    }
}

/// An undirected weighted edge.
///
/// `source` and `target` are interchangeable; the order only decides which
/// endpoint Prim's algorithm visits first.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
    pub weight: f64,
}

impl Edge {
    pub fn new(source: VertexId, target: VertexId, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Check whether `vertex` is one of the endpoints.
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.source == vertex || self.target == vertex
    }

    /// Both endpoints, source first.
    pub fn endpoints(&self) -> [VertexId; 2] {
        [self.source, self.target]
    }
}

/// Vertices and edges as handed over by the presentation layer, before
/// validation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphParts<L = ()> {
    pub vertices: Vec<Vertex<L>>,
    pub edges: Vec<Edge>,
}

/// A small undirected graph with non-negative edge weights.
///
/// Construction checks that vertex ids are unique, that every edge joins
/// two distinct existing vertices and that every weight is finite and
/// non-negative. The order of both lists is preserved; Prim's tie-break
/// depends on it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GraphParts<L>")
)]
pub struct Graph<L = ()> {
    vertices: Vec<Vertex<L>>,
    edges: Vec<Edge>,
}

impl<L> Graph<L> {
    /// Validate and build a graph.
    pub fn new(vertices: Vec<Vertex<L>>, edges: Vec<Edge>) -> Result<Self> {
        for (i, vertex) in vertices.iter().enumerate() {
            if vertices[..i].iter().any(|v| v.id == vertex.id) {
                return Err(Error::DuplicateVertex { vertex: vertex.id });
            }
        }
        for (edge_id, edge) in edges.iter().enumerate() {
            for endpoint in edge.endpoints() {
                if !vertices.iter().any(|v| v.id == endpoint) {
                    return Err(Error::UnknownVertex {
                        vertex: endpoint,
                        edge: Some(edge_id),
                    });
                }
            }
            if edge.source == edge.target {
                return Err(Error::SelfLoop {
                    edge: edge_id,
                    vertex: edge.source,
                });
            }
            if !edge.weight.is_finite() || edge.weight < 0.0 {
                return Err(Error::InvalidWeight {
                    edge: edge_id,
                    weight: edge.weight,
                });
            }
        }
        Ok(Self::from_validated(vertices, edges))
    }

    /// Build from lists already known to be valid.
    pub(crate) fn from_validated(vertices: Vec<Vertex<L>>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    pub fn vertices(&self) -> &[Vertex<L>] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<L>> {
        self.vertices.iter().find(|v| v.id == id)
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertex(id).is_some()
    }

    /// Ids of the edges touching `vertex`, in edge-list order.
    pub fn incident_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(move |(_, edge)| edge.touches(vertex))
            .map(|(id, _)| id)
    }

    /// Sum of the weights of the given edges.
    pub fn weight_of(&self, edges: &[EdgeId]) -> f64 {
        edges
            .iter()
            .filter_map(|&id| self.edge(id))
            .map(|edge| edge.weight)
            .sum()
    }

    pub fn into_parts(self) -> GraphParts<L> {
        GraphParts {
            vertices: self.vertices,
            edges: self.edges,
        }
    }
}

impl<L> TryFrom<GraphParts<L>> for Graph<L> {
    type Error = Error;

    fn try_from(parts: GraphParts<L>) -> Result<Self> {
        Self::new(parts.vertices, parts.edges)
    }
}

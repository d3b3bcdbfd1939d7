// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use blog_kernels::graph::{Edge, Graph, Vertex, VertexId};

/// Build a layout-free graph from ids and `(source, target, weight)` triples.
pub fn bare_graph(ids: &[VertexId], edges: &[(VertexId, VertexId, f64)]) -> Graph {
    Graph::new(
        ids.iter().map(|&id| Vertex::bare(id)).collect(),
        edges
            .iter()
            .map(|&(source, target, weight)| Edge::new(source, target, weight))
            .collect(),
    )
    .expect("test graph is well formed")
}

/// Total weight of a minimum spanning forest, by Kruskal with a naive union-find.
///
/// Used as an independent reference for Prim's result.
pub fn kruskal_weight<L>(graph: &Graph<L>) -> f64 {
    let ids: Vec<VertexId> = graph.vertices().iter().map(|v| v.id).collect();
    let mut parent: Vec<usize> = (0..ids.len()).collect();
    let find = |parent: &Vec<usize>, mut x: usize| {
        while parent[x] != x {
            x = parent[x];
        }
        x
    };
    let position = |id: VertexId| ids.iter().position(|&v| v == id).unwrap();

    let mut edges: Vec<&Edge> = graph.edges().iter().collect();
    edges.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap());

    let mut total = 0.0;
    for edge in edges {
        let a = find(&parent, position(edge.source));
        let b = find(&parent, position(edge.target));
        if a != b {
            parent[a] = b;
            total += edge.weight;
        }
    }
    total
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The 8-vertex, 12-edge graph drawn in the Christofides post.
//!
//! Weights are distinct, so the minimum spanning tree is unique: from vertex
//! 1 Prim's algorithm selects the edges of weight 5, 4, 3, 1, 6, 7 and 10,
//! for a total of 36.

use crate::graph::{Edge, Graph, Vertex};

/// Screen position of a vertex, as laid out in the post.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Weight of the unique minimum spanning tree of [`sample_graph`].
pub const SAMPLE_MST_WEIGHT: f64 = 36.0;

const SAMPLE_VERTICES: [(usize, Point); 8] = [
    (1, Point::new(200.0, 0.0)),
    (2, Point::new(0.0, 0.0)),
    (3, Point::new(-100.0, 100.0)),
    (4, Point::new(-100.0, 0.0)),
    (5, Point::new(-200.0, 0.0)),
    (6, Point::new(0.0, -150.0)),
    (7, Point::new(100.0, -100.0)),
    (8, Point::new(300.0, 0.0)),
];

const SAMPLE_EDGES: [(usize, usize, f64); 12] = [
    (4, 6, 1.0),
    (7, 6, 3.0),
    (7, 2, 4.0),
    (1, 2, 5.0),
    (1, 3, 6.0),
    (8, 1, 7.0),
    (4, 3, 8.0),
    (4, 2, 9.0),
    (4, 5, 10.0),
    (7, 4, 11.0),
    (1, 7, 12.0),
    (2, 3, 13.0),
];

/// Build the sample graph. Vertex 1 comes first, so it is the default start.
pub fn sample_graph() -> Graph<Point> {
    Graph::from_validated(
        SAMPLE_VERTICES
            .iter()
            .map(|&(id, point)| Vertex::new(id, point))
            .collect(),
        SAMPLE_EDGES
            .iter()
            .map(|&(source, target, weight)| Edge::new(source, target, weight))
            .collect(),
    )
}

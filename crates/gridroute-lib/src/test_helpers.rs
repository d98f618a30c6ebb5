// Test-only fixtures shared by unit tests in `gridroute-lib`.
#![allow(dead_code)]

use crate::graph::Graph;

/// A->B (2), B->C (3), A->C (10): the cheapest A->C route goes through B.
pub fn triangle_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", 2.0);
    graph.add_edge("B", "C", 3.0);
    graph.add_edge("A", "C", 10.0);
    graph
}

/// Two components: the triangle plus an isolated `X -> Y` feeder.
pub fn split_graph() -> Graph {
    let mut graph = triangle_graph();
    graph.add_edge("X", "Y", 1.0);
    graph
}

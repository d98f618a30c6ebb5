//! Shared fixture helpers for integration tests.

use std::path::PathBuf;

use gridroute_lib::{load_graph, Graph};

/// Path to the checked-in sample distribution network.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/sample_grid.txt")
}

/// Load the sample network, panicking if the fixture is missing.
#[allow(dead_code)]
pub fn fixture_graph() -> Graph {
    load_graph(&fixture_path()).expect("fixture loads")
}

/// Sum of edge weights along consecutive pairs, using the cheapest parallel edge.
#[allow(dead_code)]
pub fn path_weight(graph: &Graph, path: &[String]) -> f64 {
    path.windows(2)
        .map(|pair| {
            graph
                .edges_from(&pair[0])
                .filter(|(target, _)| *target == pair[1])
                .map(|(_, weight)| weight)
                .min_by(|a, b| a.total_cmp(b))
                .expect("consecutive vertices are joined by an edge")
        })
        .sum()
}

//! gridroute library entry points.
//!
//! This crate loads distribution-network edge lists into memory, tracks which
//! substations are out of service, and answers shortest-route queries under
//! that outage state. Higher-level consumers (the CLI, UIs) should only depend
//! on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod availability;
pub mod error;
pub mod graph;
pub mod loader;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;
pub mod source;
pub mod vertices;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use availability::{AvailabilityRegistry, OutageSnapshot};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, VertexId};
pub use loader::{
    extend_graph_from_reader, load_graph, load_graph_from_reader, load_graph_with_report,
    LoadReport, SkipReason,
};
pub use network::GridNetwork;
pub use output::{RouteMode, RouteStep, RouteSummary};
pub use path::{find_route_dijkstra, SearchConstraints, SearchPath};
pub use routing::{
    diagnose_route, find_shortest_path, find_shortest_path_with, search_constraints,
    validate_endpoints, PathResult, RouteDiagnosis, RouteStatus,
};
pub use source::{resolve_graph_path, DEFAULT_GRAPH_FILENAME, GRAPH_PATH_ENV};
pub use vertices::{fuzzy_vertex_matches, list_vertices};

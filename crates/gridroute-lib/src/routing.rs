//! Name-level routing over a loaded [`Graph`].
//!
//! This module provides:
//! - [`PathResult`] - the vertex sequence and total cost returned to callers
//! - [`find_shortest_path`] - normal or diagnostic shortest-path queries
//! - [`diagnose_route`] - explains a failed query as an outage or a gap in the network
//! - [`validate_endpoints`] - caller-side checks for same/unknown endpoints
//!
//! # Example
//!
//! ```
//! use gridroute_lib::{find_shortest_path, AvailabilityRegistry, Graph};
//!
//! let mut graph = Graph::new();
//! graph.add_edge("A", "B", 2.0);
//! graph.add_edge("B", "C", 3.0);
//! graph.add_edge("A", "C", 10.0);
//!
//! let mut outages = AvailabilityRegistry::new();
//! let result = find_shortest_path(&graph, &outages, "A", "C", false);
//! assert_eq!(result.path, vec!["A", "B", "C"]);
//!
//! // With B out of service the direct feeder is the only usable route.
//! outages.set_broken("B", true);
//! let detour = find_shortest_path(&graph, &outages, "A", "C", false);
//! assert_eq!(detour.path, vec!["A", "C"]);
//!
//! // Diagnostic mode ignores outages.
//! let theoretical = find_shortest_path(&graph, &outages, "A", "C", true);
//! assert_eq!(theoretical.total_cost, 5.0);
//! ```

use std::fmt;

use serde::Serialize;

use crate::availability::AvailabilityRegistry;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::path::{find_route_dijkstra, SearchConstraints};
use crate::vertices::fuzzy_vertex_matches;

/// Ordered route from start to end plus its accumulated weight.
///
/// An empty `path` always comes with a `total_cost` of `0.0`; partial routes
/// are never produced.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PathResult {
    pub path: Vec<String>,
    pub total_cost: f64,
}

impl PathResult {
    /// The "no path" result.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Find the lowest-cost route from `start` to `end`.
///
/// In normal mode (`ignore_availability == false`) broken vertices are
/// excluded: a broken endpoint yields an empty result without searching, and
/// edges into broken vertices are never traversed. Diagnostic mode runs the
/// same search with the outage filter disabled.
///
/// Unknown vertices, disconnected endpoints, and `start == end` all yield an
/// empty result.
pub fn find_shortest_path(
    graph: &Graph,
    registry: &AvailabilityRegistry,
    start: &str,
    end: &str,
    ignore_availability: bool,
) -> PathResult {
    match search_constraints(graph, registry, start, end, ignore_availability) {
        Some(constraints) => find_shortest_path_with(graph, start, end, &constraints),
        None => PathResult::empty(),
    }
}

/// Capture the constraints for one query.
///
/// Returns `None` when normal mode must short-circuit because an endpoint is
/// broken.
pub fn search_constraints(
    graph: &Graph,
    registry: &AvailabilityRegistry,
    start: &str,
    end: &str,
    ignore_availability: bool,
) -> Option<SearchConstraints> {
    if ignore_availability {
        return Some(SearchConstraints::unrestricted());
    }
    if registry.is_broken(start) || registry.is_broken(end) {
        return None;
    }
    Some(SearchConstraints::with_outages(registry.snapshot(graph)))
}

/// Run the search with constraints that were captured by the caller.
pub fn find_shortest_path_with(
    graph: &Graph,
    start: &str,
    end: &str,
    constraints: &SearchConstraints,
) -> PathResult {
    let (Some(start_id), Some(end_id)) = (graph.vertex_id(start), graph.vertex_id(end)) else {
        return PathResult::empty();
    };

    match find_route_dijkstra(graph, start_id, end_id, constraints) {
        Some(found) => PathResult {
            path: found
                .vertices
                .iter()
                .filter_map(|&id| graph.vertex_name(id))
                .map(str::to_string)
                .collect(),
            total_cost: found.cost,
        },
        None => PathResult::empty(),
    }
}

/// High-level outcome of a route query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    Routed,
    BlockedByOutage,
    Unreachable,
}

impl fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteStatus::Routed => "routed",
            RouteStatus::BlockedByOutage => "blocked by outage",
            RouteStatus::Unreachable => "unreachable",
        };
        f.write_str(value)
    }
}

/// Result of [`diagnose_route`].
#[derive(Debug, Clone, PartialEq)]
pub enum RouteDiagnosis {
    /// A route exists with the current outages.
    Routed(PathResult),
    /// A route exists only through out-of-service vertices.
    BlockedByOutage {
        theoretical: PathResult,
        broken_on_route: Vec<String>,
    },
    /// No route exists even with every vertex in service.
    Unreachable,
}

impl RouteDiagnosis {
    pub fn status(&self) -> RouteStatus {
        match self {
            RouteDiagnosis::Routed(_) => RouteStatus::Routed,
            RouteDiagnosis::BlockedByOutage { .. } => RouteStatus::BlockedByOutage,
            RouteDiagnosis::Unreachable => RouteStatus::Unreachable,
        }
    }

    /// The usable route, if any.
    pub fn route(&self) -> Option<&PathResult> {
        match self {
            RouteDiagnosis::Routed(route) => Some(route),
            _ => None,
        }
    }
}

/// Run a normal query and, if it fails, a diagnostic one to explain why.
pub fn diagnose_route(
    graph: &Graph,
    registry: &AvailabilityRegistry,
    start: &str,
    end: &str,
) -> RouteDiagnosis {
    let routed = find_shortest_path(graph, registry, start, end, false);
    if !routed.is_empty() {
        return RouteDiagnosis::Routed(routed);
    }

    let theoretical = find_shortest_path(graph, registry, start, end, true);
    if theoretical.is_empty() {
        return RouteDiagnosis::Unreachable;
    }

    let broken_on_route = theoretical
        .path
        .iter()
        .filter(|vertex| registry.is_broken(vertex))
        .cloned()
        .collect();
    RouteDiagnosis::BlockedByOutage {
        theoretical,
        broken_on_route,
    }
}

/// Reject requests a calling layer should never send to the engine.
///
/// `start == end` is always an error. With `strict`, endpoints missing from
/// the graph are reported together with close-match suggestions.
pub fn validate_endpoints(graph: &Graph, start: &str, end: &str, strict: bool) -> Result<()> {
    if start == end {
        return Err(Error::SameStartEnd {
            vertex: start.to_string(),
        });
    }

    if strict {
        for name in [start, end] {
            if !graph.contains(name) {
                return Err(Error::UnknownVertex {
                    name: name.to_string(),
                    suggestions: fuzzy_vertex_matches(graph, name, 3),
                });
            }
        }
    }

    Ok(())
}

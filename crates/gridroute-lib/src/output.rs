use serde::Serialize;

use crate::graph::Graph;
use crate::routing::{PathResult, RouteDiagnosis, RouteStatus};

/// Which availability rules a query ran under.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteMode {
    /// Broken vertices are excluded.
    Normal,
    /// Broken vertices are ignored.
    Diagnostic,
}

impl RouteMode {
    pub fn from_ignore_availability(ignore_availability: bool) -> Self {
        if ignore_availability {
            RouteMode::Diagnostic
        } else {
            RouteMode::Normal
        }
    }
}

/// Vertex visited along a route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub name: String,
    /// Weight of the edge that led here; absent for the first step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub cumulative: f64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub broken: bool,
}

/// Structured representation of a route query that presentation layers can
/// render or serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub status: RouteStatus,
    pub mode: RouteMode,
    pub start: String,
    pub goal: String,
    pub hops: usize,
    pub total_cost: f64,
    pub steps: Vec<RouteStep>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub broken_on_route: Vec<String>,
}

impl RouteSummary {
    /// Summarise a normal-mode query with its diagnostic fallback.
    ///
    /// For a route blocked by outages the steps describe the theoretical route
    /// and the broken vertices on it are flagged.
    pub fn from_diagnosis(graph: &Graph, start: &str, goal: &str, diagnosis: &RouteDiagnosis) -> Self {
        match diagnosis {
            RouteDiagnosis::Routed(route) => {
                Self::build(graph, start, goal, RouteStatus::Routed, RouteMode::Normal, route, &[])
            }
            RouteDiagnosis::BlockedByOutage {
                theoretical,
                broken_on_route,
            } => Self::build(
                graph,
                start,
                goal,
                RouteStatus::BlockedByOutage,
                RouteMode::Diagnostic,
                theoretical,
                broken_on_route,
            ),
            RouteDiagnosis::Unreachable => Self::build(
                graph,
                start,
                goal,
                RouteStatus::Unreachable,
                RouteMode::Diagnostic,
                &PathResult::empty(),
                &[],
            ),
        }
    }

    /// Summarise a single query without a fallback.
    pub fn from_path(graph: &Graph, start: &str, goal: &str, mode: RouteMode, route: &PathResult) -> Self {
        let status = if route.is_empty() {
            RouteStatus::Unreachable
        } else {
            RouteStatus::Routed
        };
        Self::build(graph, start, goal, status, mode, route, &[])
    }

    fn build(
        graph: &Graph,
        start: &str,
        goal: &str,
        status: RouteStatus,
        mode: RouteMode,
        route: &PathResult,
        broken_on_route: &[String],
    ) -> Self {
        let mut cumulative = 0.0;
        let mut steps = Vec::with_capacity(route.path.len());
        for (index, name) in route.path.iter().enumerate() {
            let distance = if index == 0 {
                None
            } else {
                edge_weight(graph, &route.path[index - 1], name)
            };
            cumulative += distance.unwrap_or(0.0);
            steps.push(RouteStep {
                index,
                name: name.clone(),
                distance,
                cumulative,
                broken: broken_on_route.contains(name),
            });
        }

        Self {
            status,
            mode,
            start: start.to_string(),
            goal: goal.to_string(),
            hops: route.hop_count(),
            total_cost: route.total_cost,
            steps,
            broken_on_route: broken_on_route.to_vec(),
        }
    }
}

/// Cheapest direct edge between two vertices; the search never prefers a
/// costlier parallel edge.
fn edge_weight(graph: &Graph, from: &str, to: &str) -> Option<f64> {
    graph
        .edges_from(from)
        .filter(|(target, _)| *target == to)
        .map(|(_, weight)| weight)
        .min_by(|a, b| a.total_cmp(b))
}

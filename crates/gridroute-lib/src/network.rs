//! Shared, thread-safe handle over a loaded network and its outage state.
//!
//! The graph is immutable once loaded and is shared through an `Arc` without
//! locking. The [`AvailabilityRegistry`] is the only mutable state; it sits
//! behind an `RwLock`. Queries hold the read lock just long enough to take an
//! [`OutageSnapshot`](crate::availability::OutageSnapshot), so a toggle can
//! never be observed half-applied and long searches never block writers.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::availability::AvailabilityRegistry;
use crate::error::Result;
use crate::graph::Graph;
use crate::loader::load_graph;
use crate::routing::{
    diagnose_route, find_shortest_path_with, search_constraints, PathResult, RouteDiagnosis,
};
use crate::vertices::list_vertices;

/// Cheaply cloneable network handle; clones share the same outage state.
#[derive(Debug, Clone)]
pub struct GridNetwork {
    graph: Arc<Graph>,
    availability: Arc<RwLock<AvailabilityRegistry>>,
}

impl GridNetwork {
    /// Wrap a fully loaded graph with every vertex in service.
    pub fn new(graph: Graph) -> Self {
        Self {
            graph: Arc::new(graph),
            availability: Arc::new(RwLock::new(AvailabilityRegistry::new())),
        }
    }

    /// Load an edge list and wrap it.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::new(load_graph(path)?))
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    // The registry is a plain set, so a panic mid-update cannot leave it
    // structurally invalid; recover the guard instead of propagating poison.
    fn read(&self) -> RwLockReadGuard<'_, AvailabilityRegistry> {
        self.availability
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, AvailabilityRegistry> {
        self.availability
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_broken(&self, vertex: &str, broken: bool) {
        self.write().set_broken(vertex, broken);
        tracing::debug!(vertex, broken, "availability updated");
    }

    /// Flip a vertex's state and return whether it is now broken.
    pub fn toggle(&self, vertex: &str) -> bool {
        let broken = self.write().toggle(vertex);
        tracing::debug!(vertex, broken, "availability toggled");
        broken
    }

    pub fn is_broken(&self, vertex: &str) -> bool {
        self.read().is_broken(vertex)
    }

    /// Broken vertex names in ascending order.
    pub fn broken_vertices(&self) -> Vec<String> {
        self.read().broken_keys()
    }

    /// Shortest-path query against the outage state at call time.
    pub fn find_shortest_path(
        &self,
        start: &str,
        end: &str,
        ignore_availability: bool,
    ) -> PathResult {
        let constraints =
            search_constraints(&self.graph, &self.read(), start, end, ignore_availability);
        match constraints {
            Some(constraints) => find_shortest_path_with(&self.graph, start, end, &constraints),
            None => PathResult::empty(),
        }
    }

    /// Normal query plus a diagnostic fallback, evaluated against one
    /// consistent view of the outages.
    pub fn diagnose(&self, start: &str, end: &str) -> RouteDiagnosis {
        let registry = self.read().clone();
        diagnose_route(&self.graph, &registry, start, end)
    }

    pub fn list_vertices(&self) -> Vec<String> {
        list_vertices(&self.graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::triangle_graph;

    #[test]
    fn clones_share_outage_state() {
        let network = GridNetwork::new(triangle_graph());
        let handle = network.clone();

        handle.set_broken("B", true);
        assert!(network.is_broken("B"));
        assert_eq!(network.find_shortest_path("A", "C", false).path, vec!["A", "C"]);

        network.set_broken("B", false);
        assert_eq!(handle.find_shortest_path("A", "C", false).path, vec!["A", "B", "C"]);
    }

    #[test]
    fn toggle_reports_new_state() {
        let network = GridNetwork::new(triangle_graph());
        assert!(network.toggle("C"));
        assert_eq!(network.broken_vertices(), vec!["C"]);
        assert!(!network.toggle("C"));
        assert!(network.broken_vertices().is_empty());
    }
}

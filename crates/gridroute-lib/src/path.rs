use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bitvec::vec::BitVec;
use tracing::{debug, warn};

use crate::availability::OutageSnapshot;
use crate::graph::{Graph, VertexId};

/// Constraints applied during pathfinding.
#[derive(Debug, Default, Clone)]
pub struct SearchConstraints {
    /// Vertices that must not be entered. `None` disables outage filtering.
    pub outages: Option<OutageSnapshot>,
}

impl SearchConstraints {
    /// Constraints that honour the given outage snapshot.
    pub fn with_outages(outages: OutageSnapshot) -> Self {
        Self {
            outages: Some(outages),
        }
    }

    /// Diagnostic constraints: every vertex is treated as available.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    fn is_blocked(&self, vertex: VertexId) -> bool {
        self.outages
            .as_ref()
            .map(|outages| outages.is_broken(vertex))
            .unwrap_or(false)
    }

    fn allows(&self, target: VertexId) -> bool {
        !self.is_blocked(target)
    }
}

/// Lowest-cost route found by [`find_route_dijkstra`], expressed in vertex ids.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPath {
    pub vertices: Vec<VertexId>,
    pub cost: f64,
}

/// Run Dijkstra's algorithm from `start` and return the lowest-cost path to
/// `goal` that satisfies the provided constraints.
///
/// Returns `None` when the goal is unreachable, when either endpoint is
/// blocked by an outage, or when `start == goal`. Edges whose destination is
/// blocked are never relaxed. Equal-cost alternatives never replace the first
/// predecessor recorded for a vertex.
pub fn find_route_dijkstra(
    graph: &Graph,
    start: VertexId,
    goal: VertexId,
    constraints: &SearchConstraints,
) -> Option<SearchPath> {
    let vertex_count = graph.vertex_count();
    if start >= vertex_count || goal >= vertex_count || start == goal {
        return None;
    }
    if constraints.is_blocked(start) || constraints.is_blocked(goal) {
        debug!(start, goal, "endpoint is out of service; skipping search");
        return None;
    }

    let mut distances = vec![f64::INFINITY; vertex_count];
    let mut parents: Vec<Option<VertexId>> = vec![None; vertex_count];
    let mut finalized: BitVec = BitVec::repeat(false, vertex_count);
    let mut queue = BinaryHeap::new();

    distances[start] = 0.0;
    queue.push(QueueEntry::new(start, 0.0));

    let mut settled = 0usize;
    while let Some(entry) = queue.pop() {
        // Stale entries left behind by later improvements.
        if finalized[entry.node] {
            continue;
        }
        finalized.set(entry.node, true);
        settled += 1;

        let current_distance = distances[entry.node];
        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            if !constraints.allows(next) || finalized[next] {
                continue;
            }

            let next_cost = current_distance + edge.weight;
            if next_cost < distances[next] {
                distances[next] = next_cost;
                parents[next] = Some(entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    debug!(
        start,
        goal,
        settled,
        filtered = constraints.outages.is_some(),
        outages = constraints
            .outages
            .as_ref()
            .map_or(0, OutageSnapshot::broken_count),
        "dijkstra search finished"
    );

    if distances[goal] == f64::INFINITY {
        return None;
    }

    let vertices = reconstruct_path(&parents, goal);
    if vertices.first() != Some(&start) {
        warn!(
            start,
            goal,
            first = ?vertices.first(),
            "predecessor chain does not lead back to the start; discarding route"
        );
        return None;
    }

    Some(SearchPath {
        vertices,
        cost: distances[goal],
    })
}

/// Walk predecessor links back from `goal` until a vertex without a parent.
///
/// The walk is capped at one visit per vertex so a corrupted chain can never
/// loop forever.
fn reconstruct_path(parents: &[Option<VertexId>], goal: VertexId) -> Vec<VertexId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        if path.len() > parents.len() {
            break;
        }
        path.push(node);
        current = parents.get(node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: VertexId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: VertexId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::AvailabilityRegistry;
    use crate::test_helpers::triangle_graph;

    fn ids(graph: &Graph, names: &[&str]) -> Vec<VertexId> {
        names
            .iter()
            .map(|name| graph.vertex_id(name).expect("vertex exists"))
            .collect()
    }

    fn id(graph: &Graph, name: &str) -> VertexId {
        graph.vertex_id(name).expect("vertex exists")
    }

    #[test]
    fn prefers_cheaper_two_hop_route() {
        let graph = triangle_graph();
        let path = find_route_dijkstra(
            &graph,
            id(&graph, "A"),
            id(&graph, "C"),
            &SearchConstraints::unrestricted(),
        )
        .expect("route exists");

        assert_eq!(path.vertices, ids(&graph, &["A", "B", "C"]));
        assert!((path.cost - 5.0).abs() < 1e-9);
    }

    #[test]
    fn broken_intermediate_is_never_entered() {
        let mut graph = triangle_graph();
        graph.add_edge("A", "D", 1.0);
        graph.add_edge("D", "C", 20.0);
        let mut registry = AvailabilityRegistry::new();
        registry.set_broken("B", true);
        let constraints = SearchConstraints::with_outages(registry.snapshot(&graph));

        let path = find_route_dijkstra(&graph, id(&graph, "A"), id(&graph, "C"), &constraints)
            .expect("direct edge remains");
        assert_eq!(path.vertices, ids(&graph, &["A", "C"]));
        assert!((path.cost - 10.0).abs() < 1e-9);
    }

    #[test]
    fn broken_endpoint_short_circuits() {
        let graph = triangle_graph();
        let mut registry = AvailabilityRegistry::new();
        registry.set_broken("A", true);
        let constraints = SearchConstraints::with_outages(registry.snapshot(&graph));

        assert!(find_route_dijkstra(&graph, id(&graph, "A"), id(&graph, "C"), &constraints).is_none());
    }

    #[test]
    fn equal_cost_tie_keeps_first_relaxation() {
        let mut graph = Graph::new();
        graph.add_edge("S", "X", 1.0);
        graph.add_edge("S", "Y", 1.0);
        graph.add_edge("X", "T", 1.0);
        graph.add_edge("Y", "T", 1.0);

        let path = find_route_dijkstra(
            &graph,
            id(&graph, "S"),
            id(&graph, "T"),
            &SearchConstraints::unrestricted(),
        )
        .expect("route exists");
        // X has the lower id so it settles first and claims T; Y's equal offer is discarded.
        assert_eq!(path.vertices, ids(&graph, &["S", "X", "T"]));
    }

    #[test]
    fn same_start_and_goal_yields_nothing() {
        let graph = triangle_graph();
        let a = id(&graph, "A");
        assert!(find_route_dijkstra(&graph, a, a, &SearchConstraints::unrestricted()).is_none());
    }

    #[test]
    fn out_of_range_ids_yield_nothing() {
        let graph = triangle_graph();
        assert!(find_route_dijkstra(&graph, 0, 99, &SearchConstraints::unrestricted()).is_none());
    }

    #[test]
    fn reconstruct_stops_at_root() {
        let parents = vec![None, Some(0), Some(1)];
        assert_eq!(reconstruct_path(&parents, 2), vec![0, 1, 2]);
    }

    #[test]
    fn reconstruct_terminates_on_cycle() {
        let parents = vec![Some(1), Some(0)];
        let path = reconstruct_path(&parents, 0);
        assert!(path.len() <= parents.len() + 1);
    }

    #[test]
    fn queue_pops_lowest_cost_first() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry::new(1, 4.0));
        heap.push(QueueEntry::new(2, 0.5));
        heap.push(QueueEntry::new(3, 2.0));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|entry| entry.node)).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }
}

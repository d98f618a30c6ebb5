use std::collections::HashSet;

use bitvec::vec::BitVec;

use crate::graph::{Graph, VertexId};

/// Set of vertex names currently marked as broken (out of service).
///
/// Names are not checked against any graph: marking an unknown vertex is
/// allowed and simply has no effect on routing.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityRegistry {
    broken: HashSet<String>,
}

impl AvailabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a vertex broken or available. Repeating the current state is a no-op.
    pub fn set_broken(&mut self, vertex: &str, broken: bool) {
        if broken {
            if !self.broken.contains(vertex) {
                self.broken.insert(vertex.to_string());
            }
        } else {
            self.broken.remove(vertex);
        }
    }

    /// Flip the state of a vertex and return whether it is now broken.
    pub fn toggle(&mut self, vertex: &str) -> bool {
        let now_broken = !self.is_broken(vertex);
        self.set_broken(vertex, now_broken);
        now_broken
    }

    pub fn is_broken(&self, vertex: &str) -> bool {
        self.broken.contains(vertex)
    }

    /// Broken vertex names in ascending order.
    pub fn broken_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.broken.iter().cloned().collect();
        keys.sort_unstable();
        keys
    }

    /// Capture the current outages as a bitset over the graph's vertex ids.
    pub fn snapshot(&self, graph: &Graph) -> OutageSnapshot {
        let mut bits: BitVec = BitVec::repeat(false, graph.vertex_count());
        for id in self.broken.iter().filter_map(|name| graph.vertex_id(name)) {
            bits.set(id, true);
        }
        OutageSnapshot { bits }
    }
}

/// Outages frozen at the start of a search, indexed by [`VertexId`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutageSnapshot {
    bits: BitVec,
}

impl OutageSnapshot {
    /// Ids outside the snapshot (vertices it never knew about) are available.
    pub fn is_broken(&self, vertex: VertexId) -> bool {
        self.bits.get(vertex).map(|bit| *bit).unwrap_or(false)
    }

    /// Number of graph vertices out of service.
    pub fn broken_count(&self) -> usize {
        self.bits.count_ones()
    }
}

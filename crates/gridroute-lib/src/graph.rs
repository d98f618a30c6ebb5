use std::collections::HashMap;

/// Dense identifier assigned to each vertex in first-seen order.
pub type VertexId = usize;

/// Directed edge owned by its source vertex's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: VertexId,
    pub weight: f64,
}

/// Directed, weighted distribution network keyed by vertex name.
///
/// Vertices live in an arena: every distinct key receives a [`VertexId`] the
/// first time it appears as an edge endpoint, and adjacency is stored as one
/// edge list per id. The public surface stays name-based; ids are only needed
/// by the search internals.
///
/// The graph is append-only. Edges are never removed and parallel edges are
/// kept as separate entries.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    names: Vec<String>,
    index: HashMap<String, VertexId>,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register both endpoints if they are new and append `source -> destination`.
    pub fn add_edge(&mut self, source: &str, destination: &str, weight: f64) {
        let from = self.intern(source);
        let to = self.intern(destination);
        self.adjacency[from].push(Edge { target: to, weight });
    }

    fn intern(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Lookup the id assigned to a vertex name.
    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    /// Lookup a vertex name by id.
    pub fn vertex_name(&self, id: VertexId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Whether the name has been registered as a vertex.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All vertex names in insertion order.
    pub fn vertex_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Return the outgoing edges for a vertex id.
    pub fn neighbours(&self, vertex: VertexId) -> &[Edge] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Outgoing edges of a named vertex as `(destination, weight)` pairs, in
    /// insertion order. Unknown names yield nothing.
    pub fn edges_from<'a>(&'a self, name: &str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        let edges = self
            .vertex_id(name)
            .map(|id| self.neighbours(id))
            .unwrap_or(&[]);
        edges
            .iter()
            .map(move |edge| (self.names[edge.target].as_str(), edge.weight))
    }
}

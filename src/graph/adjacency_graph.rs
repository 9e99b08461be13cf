//! Core graph structure — vertex arena + index-based adjacency lists.

use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use crate::types::{GraphResult, VertexLabel};

/// An adjacency-list graph over vertex labels of type `V`.
///
/// Vertices live in an arena in insertion order and are addressed
/// internally by their arena index. Neighbor lists keep insertion order,
/// which is what every traversal follows. Nothing is ever removed.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V: VertexLabel> {
    /// Vertex labels, in insertion order.
    labels: Vec<V>,
    /// Label -> arena index.
    index: HashMap<V, usize>,
    /// Arena index -> ordered neighbor indexes (duplicates allowed).
    neighbors: Vec<Vec<usize>>,
    /// Fixed at construction.
    directed: bool,
    /// Number of `add_edge` calls recorded.
    edge_count: usize,
}

impl<V: VertexLabel> AdjacencyGraph<V> {
    /// Create a new empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            labels: Vec::new(),
            index: HashMap::new(),
            neighbors: Vec::new(),
            directed,
            edge_count: 0,
        }
    }

    /// Create a new empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create a new empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges recorded via `add_edge`. An undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Total length of all neighbor lists.
    pub fn neighbor_entry_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum()
    }

    /// Whether `vertex` has been added.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.labels.iter()
    }

    /// Neighbors of `vertex` in insertion order, or `None` if it was never added.
    pub fn neighbors(&self, vertex: &V) -> Option<impl Iterator<Item = &V>> {
        let id = self.index_of(vertex)?;
        Some(self.neighbors[id].iter().map(move |&n| &self.labels[n]))
    }

    /// Ensure `vertex` exists. Adding an existing vertex is a no-op.
    pub fn add_vertex(&mut self, vertex: V) {
        self.intern(vertex);
    }

    /// Record the edge `src -> dest`, creating either endpoint if needed.
    ///
    /// Undirected graphs also record `dest -> src`. Repeated edges are
    /// appended again, and a self-loop on an undirected graph lists the
    /// vertex as its own neighbor twice.
    pub fn add_edge(&mut self, src: V, dest: V) {
        let s = self.intern(src);
        let d = self.intern(dest);

        self.neighbors[s].push(d);
        if !self.directed {
            self.neighbors[d].push(s);
        }
        self.edge_count += 1;

        log::debug!(
            "edge {} -> {}{}",
            self.labels[s],
            self.labels[d],
            if self.directed { "" } else { " (and back)" }
        );
    }

    /// Write one `{vertex}-->[{neighbors}]` line per vertex, in insertion order.
    pub fn write_adjacency<W: Write>(&self, out: &mut W) -> GraphResult<()> {
        for id in 0..self.labels.len() {
            writeln!(out, "{}", self.adjacency_line(id))?;
        }
        Ok(())
    }

    /// Print the adjacency listing to stdout.
    pub fn display_graph(&self) -> GraphResult<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.write_adjacency(&mut lock)
    }

    pub(crate) fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    pub(crate) fn label(&self, id: usize) -> &V {
        &self.labels[id]
    }

    pub(crate) fn neighbor_ids(&self, id: usize) -> &[usize] {
        &self.neighbors[id]
    }

    fn intern(&mut self, vertex: V) -> usize {
        if let Some(&id) = self.index.get(&vertex) {
            return id;
        }
        let id = self.labels.len();
        log::debug!("vertex {} -> #{}", vertex, id);
        self.index.insert(vertex.clone(), id);
        self.labels.push(vertex);
        self.neighbors.push(Vec::new());
        id
    }

    fn adjacency_line(&self, id: usize) -> String {
        let list = self.neighbors[id]
            .iter()
            .map(|&n| self.labels[n].to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}-->[{}]", self.labels[id], list)
    }
}

impl<V: VertexLabel> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<V: VertexLabel> fmt::Display for AdjacencyGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in 0..self.labels.len() {
            writeln!(f, "{}", self.adjacency_line(id))?;
        }
        Ok(())
    }
}

/// Edges of the six-vertex demo graph, in insertion order.
pub const DEMO_EDGES: [(&str, &str); 8] = [
    ("A", "B"),
    ("A", "C"),
    ("A", "D"),
    ("B", "D"),
    ("C", "D"),
    ("C", "F"),
    ("D", "E"),
    ("E", "F"),
];

/// The six-vertex undirected graph used throughout the docs and the CLI default.
pub fn demo_graph() -> AdjacencyGraph<String> {
    let mut graph = AdjacencyGraph::undirected();
    for (src, dest) in DEMO_EDGES {
        graph.add_edge(src.to_string(), dest.to_string());
    }
    graph
}

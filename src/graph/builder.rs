//! Fluent API for building AdjacencyGraph instances.

use crate::types::VertexLabel;

use super::AdjacencyGraph;

/// Fluent builder for constructing an AdjacencyGraph.
pub struct GraphBuilder<V: VertexLabel> {
    directed: bool,
    vertices: Vec<V>,
    edges: Vec<(V, V)>,
}

impl<V: VertexLabel> GraphBuilder<V> {
    /// Create a new builder for an undirected graph.
    pub fn new() -> Self {
        Self {
            directed: false,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Make the built graph directed (or not).
    pub fn directed(&mut self, directed: bool) -> &mut Self {
        self.directed = directed;
        self
    }

    /// Add a vertex with no edges.
    pub fn vertex(&mut self, vertex: V) -> &mut Self {
        self.vertices.push(vertex);
        self
    }

    /// Add an edge between two vertices.
    pub fn edge(&mut self, src: V, dest: V) -> &mut Self {
        self.edges.push((src, dest));
        self
    }

    /// Add several edges at once.
    pub fn edges<I>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        self.edges.extend(edges);
        self
    }

    /// Build the final AdjacencyGraph.
    ///
    /// Standalone vertices are inserted before any edge, so they come
    /// first in the adjacency listing.
    pub fn build(self) -> AdjacencyGraph<V> {
        let mut graph = AdjacencyGraph::new(self.directed);
        for vertex in self.vertices {
            graph.add_vertex(vertex);
        }
        for (src, dest) in self.edges {
            graph.add_edge(src, dest);
        }
        graph
    }
}

impl<V: VertexLabel> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

//! adjgraph — a small adjacency-list graph with insertion-ordered
//! neighbors and three traversals.
//!
//! Vertices are identified by any hashable, displayable label. Edges may be
//! directed or undirected (fixed per graph), duplicates are kept, and
//! neither vertices nor edges are ever removed.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    demo_graph, format_sequence, AdjacencyGraph, GraphBuilder, TraversalOrder, TraversalResult,
    DEMO_EDGES,
};
pub use types::{parse_edge_spec, GraphError, GraphResult, VertexLabel};

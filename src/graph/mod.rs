//! In-memory graph operations — the core data structure.

pub mod adjacency_graph;
pub mod builder;
pub mod traversal;

pub use adjacency_graph::{demo_graph, AdjacencyGraph, DEMO_EDGES};
pub use builder::GraphBuilder;
pub use traversal::{format_sequence, TraversalOrder, TraversalResult};

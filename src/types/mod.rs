//! Shared data types for the adjgraph library.

pub mod error;
pub mod vertex;

pub use error::{GraphError, GraphResult};
pub use vertex::{parse_edge_spec, VertexLabel};

//! Error types for the adjgraph library.

use thiserror::Error;

/// All errors that can occur in the adjgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Traversal started from a vertex that was never added.
    #[error("Start vertex {0} not found")]
    VertexNotFound(String),

    /// Edge argument not of the form `SRC:DEST`.
    #[error("Invalid edge spec '{0}', expected SRC:DEST")]
    InvalidEdgeSpec(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

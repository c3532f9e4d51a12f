//! Error type shared by graph mutation and algorithm entry points.

/// Graph error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge or query referenced a node that was never inserted.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// The node identifier is already present.
    #[error("duplicate node: {0}")]
    DuplicateNode(String),

    /// An edge between the same (source, destination) pair already exists.
    /// In undirected graphs the pair is unordered.
    #[error("duplicate edge: {from} -> {to}")]
    DuplicateEdge { from: String, to: String },

    /// Rejected edge, e.g. a self-loop under `SelfLoops::Reject` or a NaN weight.
    #[error("invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: &'static str,
    },

    /// The operation cannot run with the given graph or parameters.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

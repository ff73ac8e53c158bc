use thiserror::Error;

/// Result type for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised while building or cutting a contraction graph
#[derive(Error, Debug)]
pub enum GraphError {
    /// The adjacency list cannot describe a graph that can be cut
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Two supervertices were contracted although no edge joins them
    #[error("Invalid contraction: {0}")]
    InvalidContraction(String),

    /// The randomly chosen supervertex has no edges left
    #[error("No edge available at supervertex position {position}")]
    NoEdgeAvailable { position: usize },

    /// Every trial aborted on an isolated supervertex
    #[error("All {trials} trials aborted: the graph is disconnected")]
    Disconnected { trials: usize },

    /// A line of adjacency-list text could not be parsed
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Reading adjacency-list text failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        GraphError::MalformedInput(msg.into())
    }

    pub fn invalid_contraction(msg: impl Into<String>) -> Self {
        GraphError::InvalidContraction(msg.into())
    }
}

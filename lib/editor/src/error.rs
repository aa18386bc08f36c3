//! Error types for the editor crate.

use cognito_canvas_graph::{GraphError, NodeKind};
use std::fmt;

/// Errors from editor operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// The operation needs a node selection.
    NodeSelectionRequired,
    /// The operation needs an edge selection.
    EdgeSelectionRequired,
    /// A node update carried data for a different node type.
    KindMismatch { expected: NodeKind, found: NodeKind },
    /// An underlying graph operation failed.
    Graph(GraphError),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeSelectionRequired => write!(f, "a node must be selected"),
            Self::EdgeSelectionRequired => write!(f, "an edge must be selected"),
            Self::KindMismatch { expected, found } => {
                write!(f, "node update for {found} node applied to {expected} node")
            }
            Self::Graph(err) => write!(f, "graph operation failed: {err}"),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Graph(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GraphError> for EditorError {
    fn from(err: GraphError) -> Self {
        Self::Graph(err)
    }
}

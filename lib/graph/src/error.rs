//! Error types for the graph crate.
//!
//! These errors contain only information available at the graph layer;
//! the editor wraps them where it needs to add session context.

use crate::node::NodeKind;
use cognito_canvas_core::{EdgeId, NodeId};
use std::fmt;

/// Errors from graph operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Node with the given ID was not found in the graph.
    NodeNotFound { node_id: NodeId },
    /// Edge with the given ID was not found in the graph.
    EdgeNotFound { edge_id: EdgeId },
    /// A second start or end node was added.
    DuplicateTerminal { kind: NodeKind },
    /// The graph is missing its start or end node.
    MissingTerminal { kind: NodeKind },
    /// Start and end nodes cannot be removed.
    ProtectedNode { node_id: NodeId },
    /// An edge may not connect a node to itself.
    SelfLoop { node_id: NodeId },
    /// An edge between these nodes already exists.
    DuplicateEdge { source: NodeId, target: NodeId },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeNotFound { node_id } => {
                write!(f, "node not found: {node_id}")
            }
            Self::EdgeNotFound { edge_id } => {
                write!(f, "edge not found: {edge_id}")
            }
            Self::DuplicateTerminal { kind } => {
                write!(f, "graph already has a {kind} node")
            }
            Self::MissingTerminal { kind } => {
                write!(f, "graph has no {kind} node")
            }
            Self::ProtectedNode { node_id } => {
                write!(f, "node {node_id} is a start/end marker and cannot be removed")
            }
            Self::SelfLoop { node_id } => {
                write!(f, "edge may not connect node {node_id} to itself")
            }
            Self::DuplicateEdge { source, target } => {
                write!(f, "edge from {source} to {target} already exists")
            }
        }
    }
}

impl std::error::Error for GraphError {}

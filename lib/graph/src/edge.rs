//! Edge types for workflow graphs.
//!
//! Edges are directed, typed connections between two nodes. The edge kind
//! and `animated` flag are rendering/semantic hints for the backend workflow
//! service; nothing in this workspace interprets them.

use crate::node::Node;
use cognito_canvas_core::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// The type of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    #[default]
    Default,
    Success,
    Failure,
    Condition,
    Approval,
    Rejection,
}

/// An edge's own properties, stored as the graph's edge weight.
///
/// Source and target are carried by the graph structure itself; see
/// [`EdgeRecord`] for the external representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge within the workflow.
    pub id: EdgeId,
    /// Edge type (rendering/semantic hint).
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    /// Optional display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Whether the edge renders animated.
    #[serde(default)]
    pub animated: bool,
}

impl Edge {
    /// Creates a new edge of the given kind with no label.
    #[must_use]
    pub fn new(kind: EdgeKind) -> Self {
        Self {
            id: EdgeId::new(),
            kind,
            label: None,
            animated: false,
        }
    }

    /// Sets the display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Default for Edge {
    fn default() -> Self {
        Self::new(EdgeKind::Default)
    }
}

/// A complete edge including source and target node IDs.
///
/// This is the wire representation used in the save payload and in graph
/// serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Unique edge identifier.
    pub id: EdgeId,
    /// The source node ID.
    pub source: NodeId,
    /// The target node ID.
    pub target: NodeId,
    /// Edge type.
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    /// Optional display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Whether the edge renders animated.
    #[serde(default)]
    pub animated: bool,
}

impl EdgeRecord {
    /// Builds the external representation from endpoint nodes and an edge
    /// weight.
    #[must_use]
    pub fn new(source: &Node, target: &Node, edge: &Edge) -> Self {
        Self {
            id: edge.id,
            source: source.id,
            target: target.id,
            kind: edge.kind,
            label: edge.label.clone(),
            animated: edge.animated,
        }
    }

    /// Splits the record into endpoint IDs and the edge weight.
    #[must_use]
    pub fn into_parts(self) -> (NodeId, NodeId, Edge) {
        (
            self.source,
            self.target,
            Edge {
                id: self.id,
                kind: self.kind,
                label: self.label,
                animated: self.animated,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_defaults() {
        let edge = Edge::default();
        assert_eq!(edge.kind, EdgeKind::Default);
        assert_eq!(edge.label, None);
        assert!(!edge.animated);
    }

    #[test]
    fn edge_kind_serializes_snake_case() {
        let json = serde_json::to_value(EdgeKind::Rejection).expect("serialize");
        assert_eq!(json, "rejection");
    }

    #[test]
    fn edge_label_omitted_when_absent() {
        let edge = Edge::new(EdgeKind::Success);
        let json = serde_json::to_value(&edge).expect("serialize");
        assert!(json.get("label").is_none());
        assert_eq!(json["type"], "success");
    }

    #[test]
    fn edge_with_label_roundtrip() {
        let edge = Edge::new(EdgeKind::Approval).with_label("If approved");
        let json = serde_json::to_string(&edge).expect("serialize");
        let parsed: Edge = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(edge, parsed);
    }
}

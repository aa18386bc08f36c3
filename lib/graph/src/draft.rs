//! The unsaved workflow a builder session produces.
//!
//! A draft is what the editor hands to the save call: the workflow name and
//! description alongside the full node and edge lists. Its wire shape is
//! exactly `{name, description, nodes, edges}`.

use crate::edge::EdgeRecord;
use crate::graph::WorkflowGraph;
use crate::node::Node;
use serde::{Deserialize, Serialize};

/// A complete, unsaved workflow.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowDraft {
    /// Workflow name. Must be non-empty before the draft can be saved.
    pub name: String,
    /// Workflow description; may be empty.
    pub description: String,
    /// The workflow graph.
    pub graph: WorkflowGraph,
}

impl WorkflowDraft {
    /// Creates a draft around a graph.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        graph: WorkflowGraph,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            graph,
        }
    }

    /// Whether the draft carries a usable workflow name.
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[derive(Serialize, Deserialize)]
struct DraftWire {
    name: String,
    #[serde(default)]
    description: String,
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<EdgeRecord>,
}

impl Serialize for WorkflowDraft {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        DraftWire {
            name: self.name.clone(),
            description: self.description.clone(),
            nodes: self.graph.node_list(),
            edges: self.graph.edge_records(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WorkflowDraft {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let wire = DraftWire::deserialize(deserializer)?;
        Ok(Self {
            name: wire.name,
            description: wire.description,
            graph: WorkflowGraph::from_parts(wire.nodes, wire.edges),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::Edge;
    use crate::geometry::Point;
    use crate::node::NodeKind;

    #[test]
    fn has_name_rejects_whitespace() {
        let draft = WorkflowDraft::new("   ", "", WorkflowGraph::seeded());
        assert!(!draft.has_name());

        let draft = WorkflowDraft::new("Q3 Launch", "", WorkflowGraph::seeded());
        assert!(draft.has_name());
    }

    #[test]
    fn draft_wire_shape() {
        let mut graph = WorkflowGraph::seeded();
        let start = graph.start_id().unwrap();
        let agent = graph
            .add_node(Node::new(NodeKind::Agent, Point::new(250.0, 275.0)))
            .unwrap();
        graph.add_edge(start, agent, Edge::default()).unwrap();

        let draft = WorkflowDraft::new("Demo", "", graph);
        let json = serde_json::to_value(&draft).expect("serialize");

        assert_eq!(json["name"], "Demo");
        assert_eq!(json["description"], "");
        assert_eq!(json["nodes"].as_array().unwrap().len(), 3);
        assert_eq!(json["edges"].as_array().unwrap().len(), 1);
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn draft_serde_roundtrip() {
        let mut graph = WorkflowGraph::seeded();
        let start = graph.start_id().unwrap();
        let end = graph.end_id().unwrap();
        graph.add_edge(start, end, Edge::default()).unwrap();

        let draft = WorkflowDraft::new("Roundtrip", "desc", graph);
        let json = serde_json::to_string(&draft).expect("serialize");
        let parsed: WorkflowDraft = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, draft);
    }
}

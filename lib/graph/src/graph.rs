//! Workflow graph implementation using petgraph.
//!
//! The graph owns its nodes and edges; all editor mutations go through it.
//! Because edges live in the graph structure, deleting a node removes every
//! incident edge in the same operation and dangling references cannot occur.
//!
//! Two invariants are enforced here rather than in the editor:
//! - exactly one start and one end node exist at all times
//! - start/end nodes cannot be removed

use crate::edge::{Edge, EdgeRecord};
use crate::error::GraphError;
use crate::geometry::Point;
use crate::node::{Node, NodeKind};
use cognito_canvas_core::{EdgeId, NodeId};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Seed position of the start node.
pub const START_POSITION: Point = Point::new(250.0, 50.0);
/// Seed position of the end node.
pub const END_POSITION: Point = Point::new(250.0, 500.0);

/// A workflow graph using petgraph's directed graph.
#[derive(Debug, Clone)]
pub struct WorkflowGraph {
    /// The underlying directed graph.
    graph: DiGraph<Node, Edge>,
    /// Map from NodeId to petgraph's NodeIndex for O(1) lookup.
    node_index_map: HashMap<NodeId, NodeIndex>,
    /// Map from EdgeId to petgraph's EdgeIndex for O(1) lookup.
    edge_index_map: HashMap<EdgeId, EdgeIndex>,
}

impl WorkflowGraph {
    /// Creates a new empty workflow graph.
    ///
    /// An empty graph fails [`validate`](Self::validate); the editor always
    /// works on a [`seeded`](Self::seeded) graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_index_map: HashMap::new(),
            edge_index_map: HashMap::new(),
        }
    }

    /// Creates a graph seeded with its start and end markers.
    #[must_use]
    pub fn seeded() -> Self {
        let mut graph = Self::new();
        graph.push_node(Node::new(NodeKind::Start, START_POSITION));
        graph.push_node(Node::new(NodeKind::End, END_POSITION));
        graph
    }

    /// Adds a node to the graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateTerminal`] when adding a start or end
    /// node to a graph that already has one.
    pub fn add_node(&mut self, node: Node) -> Result<NodeId, GraphError> {
        let kind = node.kind();
        if kind.is_terminal() && self.node_of_kind(kind).is_some() {
            return Err(GraphError::DuplicateTerminal { kind });
        }
        Ok(self.push_node(node))
    }

    /// Removes a node and every edge incident to it.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ProtectedNode`] for start/end nodes and
    /// [`GraphError::NodeNotFound`] for unknown IDs.
    pub fn remove_node(&mut self, node_id: NodeId) -> Result<Node, GraphError> {
        let index = *self
            .node_index_map
            .get(&node_id)
            .ok_or(GraphError::NodeNotFound { node_id })?;

        if self.graph[index].kind().is_terminal() {
            return Err(GraphError::ProtectedNode { node_id });
        }

        let node = self
            .graph
            .remove_node(index)
            .ok_or(GraphError::NodeNotFound { node_id })?;

        // remove_node swaps indices around, so the maps must be rebuilt
        self.rebuild_index_maps();
        Ok(node)
    }

    /// Moves a node to a new canvas position.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] for unknown IDs.
    pub fn move_node(&mut self, node_id: NodeId, position: Point) -> Result<(), GraphError> {
        let node = self
            .node_mut(node_id)
            .ok_or(GraphError::NodeNotFound { node_id })?;
        node.position = position;
        Ok(())
    }

    /// Adds an edge between two nodes.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is missing, the endpoints are the
    /// same node, or an edge between the endpoints already exists.
    pub fn add_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        edge: Edge,
    ) -> Result<EdgeId, GraphError> {
        let source_index = *self
            .node_index_map
            .get(&source)
            .ok_or(GraphError::NodeNotFound { node_id: source })?;
        let target_index = *self
            .node_index_map
            .get(&target)
            .ok_or(GraphError::NodeNotFound { node_id: target })?;

        if source == target {
            return Err(GraphError::SelfLoop { node_id: source });
        }
        if self.graph.find_edge(source_index, target_index).is_some() {
            return Err(GraphError::DuplicateEdge { source, target });
        }

        let edge_id = edge.id;
        let index = self.graph.add_edge(source_index, target_index, edge);
        self.edge_index_map.insert(edge_id, index);
        Ok(edge_id)
    }

    /// Removes an edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] for unknown IDs.
    pub fn remove_edge(&mut self, edge_id: EdgeId) -> Result<Edge, GraphError> {
        let index = *self
            .edge_index_map
            .get(&edge_id)
            .ok_or(GraphError::EdgeNotFound { edge_id })?;

        let edge = self
            .graph
            .remove_edge(index)
            .ok_or(GraphError::EdgeNotFound { edge_id })?;

        self.rebuild_index_maps();
        Ok(edge)
    }

    /// Returns a reference to a node by its ID.
    #[must_use]
    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        let index = self.node_index_map.get(&node_id)?;
        self.graph.node_weight(*index)
    }

    /// Returns a mutable reference to a node by its ID.
    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        let index = self.node_index_map.get(&node_id)?;
        self.graph.node_weight_mut(*index)
    }

    /// Returns a reference to an edge's properties by its ID.
    #[must_use]
    pub fn edge(&self, edge_id: EdgeId) -> Option<&Edge> {
        let index = self.edge_index_map.get(&edge_id)?;
        self.graph.edge_weight(*index)
    }

    /// Returns a mutable reference to an edge's properties by its ID.
    pub fn edge_mut(&mut self, edge_id: EdgeId) -> Option<&mut Edge> {
        let index = self.edge_index_map.get(&edge_id)?;
        self.graph.edge_weight_mut(*index)
    }

    /// Returns the source and target node IDs of an edge.
    #[must_use]
    pub fn edge_endpoints(&self, edge_id: EdgeId) -> Option<(NodeId, NodeId)> {
        let index = self.edge_index_map.get(&edge_id)?;
        let (source, target) = self.graph.edge_endpoints(*index)?;
        Some((self.graph[source].id, self.graph[target].id))
    }

    /// Returns all nodes in the graph.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    /// Returns the full node list, cloned, in insertion order.
    #[must_use]
    pub fn node_list(&self) -> Vec<Node> {
        self.graph.node_weights().cloned().collect()
    }

    /// Returns the external representation of every edge.
    #[must_use]
    pub fn edge_records(&self) -> Vec<EdgeRecord> {
        self.graph
            .edge_references()
            .map(|e| EdgeRecord::new(&self.graph[e.source()], &self.graph[e.target()], e.weight()))
            .collect()
    }

    /// Returns the IDs of every edge incident to a node, as source or target.
    #[must_use]
    pub fn incident_edges(&self, node_id: NodeId) -> Vec<EdgeId> {
        let Some(&index) = self.node_index_map.get(&node_id) else {
            return Vec::new();
        };
        self.graph
            .edge_references()
            .filter(|e| e.source() == index || e.target() == index)
            .map(|e| e.weight().id)
            .collect()
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether a node with this ID is present.
    #[must_use]
    pub fn contains_node(&self, node_id: NodeId) -> bool {
        self.node_index_map.contains_key(&node_id)
    }

    /// Returns the ID of the start node, if present.
    #[must_use]
    pub fn start_id(&self) -> Option<NodeId> {
        self.node_of_kind(NodeKind::Start)
    }

    /// Returns the ID of the end node, if present.
    #[must_use]
    pub fn end_id(&self) -> Option<NodeId> {
        self.node_of_kind(NodeKind::End)
    }

    /// Validates the terminal invariant: exactly one start and one end node.
    ///
    /// Dangling edges cannot occur structurally, so this is the only check a
    /// deserialized graph needs before the editor works on it.
    ///
    /// # Errors
    ///
    /// Returns an error describing the violated invariant.
    pub fn validate(&self) -> Result<(), GraphError> {
        for kind in [NodeKind::Start, NodeKind::End] {
            match self.nodes().filter(|n| n.kind() == kind).count() {
                0 => return Err(GraphError::MissingTerminal { kind }),
                1 => {}
                _ => return Err(GraphError::DuplicateTerminal { kind }),
            }
        }
        Ok(())
    }

    /// Rebuilds a graph from its wire parts.
    ///
    /// Edge records referencing unknown node IDs or forming self-loops are
    /// skipped rather than rejected; the save payload is built from graphs
    /// that never contained them, so tolerance only matters for foreign input.
    #[must_use]
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<EdgeRecord>) -> Self {
        let mut graph = Self::new();
        for node in nodes {
            graph.push_node(node);
        }
        for record in edges {
            let (source, target, edge) = record.into_parts();
            let _ = graph.add_edge(source, target, edge);
        }
        graph
    }

    fn push_node(&mut self, node: Node) -> NodeId {
        let node_id = node.id;
        let index = self.graph.add_node(node);
        self.node_index_map.insert(node_id, index);
        node_id
    }

    fn node_of_kind(&self, kind: NodeKind) -> Option<NodeId> {
        self.nodes().find(|n| n.kind() == kind).map(|n| n.id)
    }

    fn rebuild_index_maps(&mut self) {
        self.node_index_map.clear();
        for index in self.graph.node_indices() {
            if let Some(node) = self.graph.node_weight(index) {
                self.node_index_map.insert(node.id, index);
            }
        }
        self.edge_index_map.clear();
        for index in self.graph.edge_indices() {
            if let Some(edge) = self.graph.edge_weight(index) {
                self.edge_index_map.insert(edge.id, index);
            }
        }
    }
}

impl Default for WorkflowGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for WorkflowGraph {
    fn eq(&self, other: &Self) -> bool {
        self.node_list() == other.node_list() && self.edge_records() == other.edge_records()
    }
}

/// Wire shape of a graph: flat node and edge lists.
#[derive(Serialize, Deserialize)]
struct GraphWire {
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<EdgeRecord>,
}

impl Serialize for WorkflowGraph {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        GraphWire {
            nodes: self.node_list(),
            edges: self.edge_records(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WorkflowGraph {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let wire = GraphWire::deserialize(deserializer)?;
        Ok(Self::from_parts(wire.nodes, wire.edges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::EdgeKind;

    fn agent_at(x: f64, y: f64) -> Node {
        Node::new(NodeKind::Agent, Point::new(x, y))
    }

    #[test]
    fn seeded_graph_has_terminals_at_seed_positions() {
        let graph = WorkflowGraph::seeded();
        assert_eq!(graph.node_count(), 2);

        let start = graph.node(graph.start_id().unwrap()).unwrap();
        let end = graph.node(graph.end_id().unwrap()).unwrap();
        assert_eq!(start.position, Point::new(250.0, 50.0));
        assert_eq!(end.position, Point::new(250.0, 500.0));
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn add_and_get_node() {
        let mut graph = WorkflowGraph::seeded();
        let id = graph.add_node(agent_at(100.0, 100.0)).unwrap();

        let node = graph.node(id).expect("node present");
        assert_eq!(node.kind(), NodeKind::Agent);
        assert_eq!(node.position, Point::new(100.0, 100.0));
    }

    #[test]
    fn second_start_node_is_rejected() {
        let mut graph = WorkflowGraph::seeded();
        let result = graph.add_node(Node::new(NodeKind::Start, Point::new(0.0, 0.0)));
        assert_eq!(
            result.unwrap_err(),
            GraphError::DuplicateTerminal {
                kind: NodeKind::Start
            }
        );
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn terminal_nodes_cannot_be_removed() {
        let mut graph = WorkflowGraph::seeded();
        let start = graph.start_id().unwrap();
        let end = graph.end_id().unwrap();

        assert!(matches!(
            graph.remove_node(start),
            Err(GraphError::ProtectedNode { .. })
        ));
        assert!(matches!(
            graph.remove_node(end),
            Err(GraphError::ProtectedNode { .. })
        ));
        assert_eq!(graph.node_count(), 2);
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn remove_node_cascades_exactly_its_incident_edges() {
        let mut graph = WorkflowGraph::seeded();
        let start = graph.start_id().unwrap();
        let end = graph.end_id().unwrap();
        let a = graph.add_node(agent_at(100.0, 100.0)).unwrap();
        let b = graph.add_node(agent_at(400.0, 100.0)).unwrap();

        let in_a = graph.add_edge(start, a, Edge::default()).unwrap();
        let out_a = graph.add_edge(a, b, Edge::default()).unwrap();
        let surviving = graph.add_edge(b, end, Edge::default()).unwrap();
        assert_eq!(graph.incident_edges(a), vec![in_a, out_a]);

        graph.remove_node(a).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.edge(surviving).is_some());

        // Every remaining edge still references present nodes.
        for record in graph.edge_records() {
            assert!(graph.contains_node(record.source));
            assert!(graph.contains_node(record.target));
        }
    }

    #[test]
    fn lookups_survive_removal_index_shuffle() {
        let mut graph = WorkflowGraph::seeded();
        let a = graph.add_node(agent_at(1.0, 1.0)).unwrap();
        let b = graph.add_node(agent_at(2.0, 2.0)).unwrap();
        let c = graph.add_node(agent_at(3.0, 3.0)).unwrap();

        // Removing an interior node swap-removes petgraph indices.
        graph.remove_node(a).unwrap();

        assert_eq!(graph.node(b).unwrap().position, Point::new(2.0, 2.0));
        assert_eq!(graph.node(c).unwrap().position, Point::new(3.0, 3.0));
        graph.move_node(c, Point::new(9.0, 9.0)).unwrap();
        assert_eq!(graph.node(c).unwrap().position, Point::new(9.0, 9.0));
    }

    #[test]
    fn self_loop_is_rejected() {
        let mut graph = WorkflowGraph::seeded();
        let a = graph.add_node(agent_at(0.0, 0.0)).unwrap();
        assert_eq!(
            graph.add_edge(a, a, Edge::default()).unwrap_err(),
            GraphError::SelfLoop { node_id: a }
        );
    }

    #[test]
    fn duplicate_edge_is_rejected() {
        let mut graph = WorkflowGraph::seeded();
        let start = graph.start_id().unwrap();
        let end = graph.end_id().unwrap();

        graph.add_edge(start, end, Edge::default()).unwrap();
        let result = graph.add_edge(start, end, Edge::new(EdgeKind::Success));
        assert_eq!(
            result.unwrap_err(),
            GraphError::DuplicateEdge {
                source: start,
                target: end
            }
        );
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn edge_to_missing_node_is_rejected() {
        let mut graph = WorkflowGraph::seeded();
        let start = graph.start_id().unwrap();
        let ghost = NodeId::new();
        assert_eq!(
            graph.add_edge(start, ghost, Edge::default()).unwrap_err(),
            GraphError::NodeNotFound { node_id: ghost }
        );
    }

    #[test]
    fn remove_edge_leaves_nodes_alone() {
        let mut graph = WorkflowGraph::seeded();
        let start = graph.start_id().unwrap();
        let end = graph.end_id().unwrap();
        let edge_id = graph.add_edge(start, end, Edge::default()).unwrap();

        let removed = graph.remove_edge(edge_id).unwrap();
        assert_eq!(removed.id, edge_id);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn edge_endpoints_reports_ids() {
        let mut graph = WorkflowGraph::seeded();
        let start = graph.start_id().unwrap();
        let end = graph.end_id().unwrap();
        let edge_id = graph.add_edge(start, end, Edge::default()).unwrap();

        assert_eq!(graph.edge_endpoints(edge_id), Some((start, end)));
    }

    #[test]
    fn validate_detects_missing_end() {
        let mut graph = WorkflowGraph::new();
        graph
            .add_node(Node::new(NodeKind::Start, Point::new(0.0, 0.0)))
            .unwrap();
        assert_eq!(
            graph.validate().unwrap_err(),
            GraphError::MissingTerminal { kind: NodeKind::End }
        );
    }

    #[test]
    fn graph_serde_roundtrip() {
        let mut graph = WorkflowGraph::seeded();
        let start = graph.start_id().unwrap();
        let a = graph.add_node(agent_at(100.0, 250.0)).unwrap();
        graph
            .add_edge(start, a, Edge::new(EdgeKind::Success).with_label("ok"))
            .unwrap();

        let json = serde_json::to_string(&graph).expect("serialize");
        let parsed: WorkflowGraph = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(parsed, graph);
        assert!(parsed.node(a).is_some());
        assert_eq!(parsed.edge_records(), graph.edge_records());
    }

    #[test]
    fn deserialize_skips_dangling_edges() {
        let mut graph = WorkflowGraph::seeded();
        let start = graph.start_id().unwrap();
        let end = graph.end_id().unwrap();
        graph.add_edge(start, end, Edge::default()).unwrap();

        let mut json = serde_json::to_value(&graph).expect("serialize");
        json["edges"].as_array_mut().unwrap().push(serde_json::json!({
            "id": EdgeId::new(),
            "source": NodeId::new(),
            "target": end,
            "type": "default",
            "animated": false
        }));

        let parsed: WorkflowGraph = serde_json::from_value(json).expect("deserialize");
        assert_eq!(parsed.edge_count(), 1);
    }
}

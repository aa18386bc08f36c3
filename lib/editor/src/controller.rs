//! The editor session controller.
//!
//! A [`CanvasEditor`] tracks one selection and one interaction at a time:
//!
//! - selection: nothing, a node, or an edge (drives the properties panel)
//! - interaction: idle, dragging a node, or drawing an edge from a source
//!
//! Pointer events arrive in screen space and are converted through the
//! viewport before touching node coordinates. Everything here is local and
//! synchronous; the only fallible-at-runtime operation in a session is the
//! save call, which lives in the client crate.

use crate::error::EditorError;
use crate::viewport::Viewport;
use cognito_canvas_core::{EdgeId, NodeId};
use cognito_canvas_graph::{
    Edge, EdgeKind, GraphError, Node, NodeConfig, NodeKind, Point, WorkflowDraft, WorkflowGraph,
};
use serde::{Deserialize, Serialize};

/// The element whose properties are being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    None,
    Node(NodeId),
    Edge(EdgeId),
}

/// The pointer interaction in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Interaction {
    /// No drag or connect in progress.
    #[default]
    Idle,
    /// A node follows the pointer. `grab_offset` is the canvas-space vector
    /// from the node's position to the grab point, so the node does not jump
    /// under the pointer.
    Dragging { node: NodeId, grab_offset: Point },
    /// An edge is being drawn out of `source`; the next node click completes
    /// it.
    Connecting { source: NodeId },
}

/// An interactive workflow-building session.
#[derive(Debug, Clone)]
pub struct CanvasEditor {
    name: String,
    description: String,
    graph: WorkflowGraph,
    viewport: Viewport,
    selection: Selection,
    interaction: Interaction,
}

impl CanvasEditor {
    /// Creates a session around a freshly seeded graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            graph: WorkflowGraph::seeded(),
            viewport: Viewport::default(),
            selection: Selection::None,
            interaction: Interaction::Idle,
        }
    }

    /// Resumes a session from a previously produced draft.
    #[must_use]
    pub fn from_draft(draft: WorkflowDraft) -> Self {
        Self {
            name: draft.name,
            description: draft.description,
            graph: draft.graph,
            viewport: Viewport::default(),
            selection: Selection::None,
            interaction: Interaction::Idle,
        }
    }

    /// Instantiates the template for `kind` at the canvas center (adjusted
    /// for pan), appends it, and selects it.
    ///
    /// # Errors
    ///
    /// Adding a second start or end node is rejected by the graph.
    pub fn add_node(&mut self, kind: NodeKind) -> Result<NodeId, EditorError> {
        let node = Node::new(kind, self.viewport.canvas_center());
        let id = self.graph.add_node(node)?;
        self.selection = Selection::Node(id);
        self.interaction = Interaction::Idle;
        Ok(id)
    }

    /// Pointer pressed on a node.
    ///
    /// While connecting, a press on a different node completes the edge and
    /// returns the session to idle; a press on the pending source cancels.
    /// Otherwise the node is selected and a drag begins.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown nodes, or when completing a connection
    /// the graph rejects (duplicate edge); the connect mode is exited either
    /// way and no edge is created on rejection.
    pub fn pointer_down(&mut self, node_id: NodeId, pointer: Point) -> Result<(), EditorError> {
        let Some(node) = self.graph.node(node_id) else {
            return Err(EditorError::Graph(GraphError::NodeNotFound { node_id }));
        };

        if let Interaction::Connecting { source } = self.interaction {
            self.interaction = Interaction::Idle;
            if source == node_id {
                return Ok(());
            }
            self.graph.add_edge(source, node_id, Edge::default())?;
            self.selection = Selection::None;
            return Ok(());
        }

        let grab_offset = self.viewport.to_canvas_space(pointer) - node.position;
        self.selection = Selection::Node(node_id);
        self.interaction = Interaction::Dragging {
            node: node_id,
            grab_offset,
        };
        Ok(())
    }

    /// Pointer moved. Only meaningful while dragging: the grabbed node
    /// follows the pointer through the viewport transform.
    pub fn pointer_move(&mut self, pointer: Point) {
        if let Interaction::Dragging { node, grab_offset } = self.interaction {
            let position = self.viewport.to_canvas_space(pointer) - grab_offset;
            if self.graph.move_node(node, position).is_err() {
                self.interaction = Interaction::Idle;
            }
        }
    }

    /// Pointer released: ends a drag. Selection is unchanged.
    pub fn pointer_up(&mut self) {
        if matches!(self.interaction, Interaction::Dragging { .. }) {
            self.interaction = Interaction::Idle;
        }
    }

    /// Click on empty canvas: clears the selection and cancels a pending
    /// connect.
    pub fn click_background(&mut self) {
        self.selection = Selection::None;
        self.interaction = Interaction::Idle;
    }

    /// Click on an edge: selects it (and cancels a pending connect).
    ///
    /// # Errors
    ///
    /// Returns an error for unknown edges.
    pub fn click_edge(&mut self, edge_id: EdgeId) -> Result<(), EditorError> {
        if self.graph.edge(edge_id).is_none() {
            return Err(EditorError::Graph(GraphError::EdgeNotFound { edge_id }));
        }
        self.selection = Selection::Edge(edge_id);
        self.interaction = Interaction::Idle;
        Ok(())
    }

    /// Selects a node without starting a drag (list views, programmatic
    /// selection). Cancels any interaction in progress.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown nodes.
    pub fn select_node(&mut self, node_id: NodeId) -> Result<(), EditorError> {
        if !self.graph.contains_node(node_id) {
            return Err(EditorError::Graph(GraphError::NodeNotFound { node_id }));
        }
        self.selection = Selection::Node(node_id);
        self.interaction = Interaction::Idle;
        Ok(())
    }

    /// Enters connect mode with the selected node as the pending source.
    ///
    /// # Errors
    ///
    /// Requires a node selection.
    pub fn begin_connect(&mut self) -> Result<(), EditorError> {
        let Selection::Node(source) = self.selection else {
            return Err(EditorError::NodeSelectionRequired);
        };
        self.interaction = Interaction::Connecting { source };
        Ok(())
    }

    /// Deletes the selected element.
    ///
    /// Deleting a node cascades to its incident edges. Deleting a start or
    /// end node, or having nothing selected, is a no-op rather than an
    /// error: the properties panel never offers delete in those states.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected element no longer exists.
    pub fn delete_selection(&mut self) -> Result<(), EditorError> {
        match self.selection {
            Selection::None => Ok(()),
            Selection::Node(node_id) => {
                match self.graph.remove_node(node_id) {
                    Ok(_) => {
                        self.selection = Selection::None;
                        self.interaction = Interaction::Idle;
                        Ok(())
                    }
                    Err(GraphError::ProtectedNode { .. }) => Ok(()),
                    Err(err) => Err(err.into()),
                }
            }
            Selection::Edge(edge_id) => {
                self.graph.remove_edge(edge_id)?;
                self.selection = Selection::None;
                Ok(())
            }
        }
    }

    /// Replaces the selected node's data record.
    ///
    /// The new record must carry the same type tag as the node; the panel
    /// edits data within a type, it never transmutes nodes.
    ///
    /// # Errors
    ///
    /// Requires a node selection; rejects a record of a different type.
    pub fn update_selected_node(&mut self, config: NodeConfig) -> Result<(), EditorError> {
        let Selection::Node(node_id) = self.selection else {
            return Err(EditorError::NodeSelectionRequired);
        };
        let node = self
            .graph
            .node_mut(node_id)
            .ok_or(EditorError::Graph(GraphError::NodeNotFound { node_id }))?;
        if config.kind() != node.kind() {
            return Err(EditorError::KindMismatch {
                expected: node.kind(),
                found: config.kind(),
            });
        }
        node.config = config;
        Ok(())
    }

    /// Sets the selected edge's type.
    ///
    /// # Errors
    ///
    /// Requires an edge selection.
    pub fn set_selected_edge_kind(&mut self, kind: EdgeKind) -> Result<(), EditorError> {
        self.selected_edge_mut()?.kind = kind;
        Ok(())
    }

    /// Sets or clears the selected edge's label.
    ///
    /// # Errors
    ///
    /// Requires an edge selection.
    pub fn set_selected_edge_label(&mut self, label: Option<String>) -> Result<(), EditorError> {
        self.selected_edge_mut()?.label = label;
        Ok(())
    }

    /// Toggles the selected edge's animated rendering hint.
    ///
    /// # Errors
    ///
    /// Requires an edge selection.
    pub fn set_selected_edge_animated(&mut self, animated: bool) -> Result<(), EditorError> {
        self.selected_edge_mut()?.animated = animated;
        Ok(())
    }

    /// Sets the workflow name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets the workflow description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// The workflow name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The workflow description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The graph being edited.
    #[must_use]
    pub fn graph(&self) -> &WorkflowGraph {
        &self.graph
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The interaction in progress.
    #[must_use]
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// The zoom/pan viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mutable viewport access for zoom/pan controls.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// The selected node, if the selection is a node.
    #[must_use]
    pub fn selected_node(&self) -> Option<&Node> {
        match self.selection {
            Selection::Node(id) => self.graph.node(id),
            _ => None,
        }
    }

    /// The selected edge, if the selection is an edge.
    #[must_use]
    pub fn selected_edge(&self) -> Option<&Edge> {
        match self.selection {
            Selection::Edge(id) => self.graph.edge(id),
            _ => None,
        }
    }

    /// Snapshots the session into the save payload.
    #[must_use]
    pub fn draft(&self) -> WorkflowDraft {
        WorkflowDraft::new(self.name.clone(), self.description.clone(), self.graph.clone())
    }

    fn selected_edge_mut(&mut self) -> Result<&mut Edge, EditorError> {
        let Selection::Edge(edge_id) = self.selection else {
            return Err(EditorError::EdgeSelectionRequired);
        };
        self.graph
            .edge_mut(edge_id)
            .ok_or(EditorError::Graph(GraphError::EdgeNotFound { edge_id }))
    }
}

impl Default for CanvasEditor {
    fn default() -> Self {
        Self::new()
    }
}

//! Workflow graph model for the cognito-canvas editor.
//!
//! This crate provides the data model the visual workflow builder operates on:
//!
//! - **Nodes**: positioned, typed steps with per-type data records
//! - **Edges**: directed, typed connections between two nodes
//! - **Graph**: directed graph using petgraph with ID-based lookup,
//!   cascade deletion, and start/end terminal invariants
//! - **Draft**: the `{name, description, nodes, edges}` save payload

pub mod draft;
pub mod edge;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod node;

pub use draft::WorkflowDraft;
pub use edge::{Edge, EdgeKind, EdgeRecord};
pub use error::GraphError;
pub use geometry::Point;
pub use graph::WorkflowGraph;
pub use node::{Comparator, Node, NodeConfig, NodeKind, ReviewKind, ThresholdOp, TriggerKind};

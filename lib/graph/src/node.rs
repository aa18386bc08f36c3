//! Workflow node types and per-type data records.
//!
//! Nodes are the building blocks of a workflow graph. Each node has:
//! - A unique ID within the workflow
//! - A position in canvas space
//! - A data record whose shape is fixed by the node's type
//!
//! The node type is a closed set; the `data` record is an adjacently tagged
//! union so the wire shape is `{id, type, position, data}`.

use crate::geometry::Point;
use cognito_canvas_core::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The type of a workflow node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Entry marker, exactly one per graph.
    Start,
    /// Exit marker, exactly one per graph.
    End,
    /// An AI marketing agent performing an action.
    Agent,
    /// Expression-based branching on a named value.
    Condition,
    /// What initiates the workflow (manual, schedule, event, API).
    Trigger,
    /// Human-in-the-loop review step.
    Hitl,
    /// Metric threshold check.
    Metric,
    /// Multi-option decision point.
    Decision,
}

impl NodeKind {
    /// Whether this kind is one of the start/end markers seeded at graph
    /// creation and protected from deletion.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Agent => "agent",
            Self::Condition => "condition",
            Self::Trigger => "trigger",
            Self::Hitl => "hitl",
            Self::Metric => "metric",
            Self::Decision => "decision",
        };
        f.write_str(name)
    }
}

/// Comparator for condition nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    #[default]
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    Contains,
}

/// How a trigger node initiates the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    #[default]
    Manual,
    Schedule,
    Event,
    Api,
}

/// The kind of human review a HITL node requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewKind {
    #[default]
    Approval,
    Edit,
    Input,
}

/// Threshold operator for metric nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdOp {
    #[default]
    Above,
    Below,
    Equals,
}

/// The data record for a node, varying by type.
///
/// Each variant carries exactly the fields the properties panel edits for
/// that type. The type tags (and the edge kinds) are opaque labels as far as
/// this workspace is concerned; no executor interprets them here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum NodeConfig {
    /// Start marker.
    Start {
        #[serde(alias = "workflowName")]
        workflow_name: String,
    },
    /// End marker.
    End { message: String },
    /// Agent action.
    Agent {
        #[serde(alias = "agentId")]
        agent_id: Option<i64>,
        #[serde(alias = "agentName")]
        agent_name: String,
        role: String,
        action: String,
    },
    /// Conditional branch.
    Condition {
        condition: String,
        comparator: Comparator,
        value: String,
    },
    /// Workflow trigger.
    Trigger {
        #[serde(alias = "triggerType")]
        trigger_type: TriggerKind,
        schedule: String,
        event: String,
    },
    /// Human-in-the-loop review.
    Hitl {
        #[serde(alias = "reviewType")]
        review_type: ReviewKind,
        instructions: String,
        #[serde(alias = "timeout")]
        timeout_hours: u32,
    },
    /// Metric threshold check.
    Metric {
        #[serde(alias = "metricName")]
        metric_name: String,
        threshold: f64,
        operator: ThresholdOp,
    },
    /// Multi-option decision.
    Decision {
        question: String,
        options: Vec<String>,
    },
}

impl NodeConfig {
    /// Returns the default data record for the given node type.
    ///
    /// These are the templates the editor instantiates when a node is added
    /// from the toolbar.
    #[must_use]
    pub fn template(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Start => Self::Start {
                workflow_name: "New Workflow".to_string(),
            },
            NodeKind::End => Self::End {
                message: "Workflow completed".to_string(),
            },
            NodeKind::Agent => Self::Agent {
                agent_id: None,
                agent_name: "Select Agent".to_string(),
                role: String::new(),
                action: String::new(),
            },
            NodeKind::Condition => Self::Condition {
                condition: String::new(),
                comparator: Comparator::default(),
                value: String::new(),
            },
            NodeKind::Trigger => Self::Trigger {
                trigger_type: TriggerKind::default(),
                schedule: String::new(),
                event: String::new(),
            },
            NodeKind::Hitl => Self::Hitl {
                review_type: ReviewKind::default(),
                instructions: String::new(),
                timeout_hours: 24,
            },
            NodeKind::Metric => Self::Metric {
                metric_name: String::new(),
                threshold: 0.0,
                operator: ThresholdOp::default(),
            },
            NodeKind::Decision => Self::Decision {
                question: String::new(),
                options: vec!["Yes".to_string(), "No".to_string()],
            },
        }
    }

    /// Returns the type of this data record.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Start { .. } => NodeKind::Start,
            Self::End { .. } => NodeKind::End,
            Self::Agent { .. } => NodeKind::Agent,
            Self::Condition { .. } => NodeKind::Condition,
            Self::Trigger { .. } => NodeKind::Trigger,
            Self::Hitl { .. } => NodeKind::Hitl,
            Self::Metric { .. } => NodeKind::Metric,
            Self::Decision { .. } => NodeKind::Decision,
        }
    }
}

/// A workflow node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node within the workflow.
    pub id: NodeId,
    /// Position in canvas space.
    pub position: Point,
    /// Per-type data record (carries the node type tag).
    #[serde(flatten)]
    pub config: NodeConfig,
}

impl Node {
    /// Creates a new node of the given type from its template.
    #[must_use]
    pub fn new(kind: NodeKind, position: Point) -> Self {
        Self {
            id: NodeId::new(),
            position,
            config: NodeConfig::template(kind),
        }
    }

    /// Returns the type of this node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.config.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_matches_kind() {
        for kind in [
            NodeKind::Start,
            NodeKind::End,
            NodeKind::Agent,
            NodeKind::Condition,
            NodeKind::Trigger,
            NodeKind::Hitl,
            NodeKind::Metric,
            NodeKind::Decision,
        ] {
            assert_eq!(NodeConfig::template(kind).kind(), kind);
        }
    }

    #[test]
    fn agent_template_defaults() {
        let NodeConfig::Agent {
            agent_id,
            agent_name,
            role,
            action,
        } = NodeConfig::template(NodeKind::Agent)
        else {
            panic!("expected agent template");
        };
        assert_eq!(agent_id, None);
        assert_eq!(agent_name, "Select Agent");
        assert!(role.is_empty());
        assert!(action.is_empty());
    }

    #[test]
    fn hitl_template_defaults() {
        let NodeConfig::Hitl {
            review_type,
            timeout_hours,
            ..
        } = NodeConfig::template(NodeKind::Hitl)
        else {
            panic!("expected hitl template");
        };
        assert_eq!(review_type, ReviewKind::Approval);
        assert_eq!(timeout_hours, 24);
    }

    #[test]
    fn decision_template_has_yes_no_options() {
        let NodeConfig::Decision { options, .. } = NodeConfig::template(NodeKind::Decision) else {
            panic!("expected decision template");
        };
        assert_eq!(options, vec!["Yes", "No"]);
    }

    #[test]
    fn node_wire_shape() {
        let node = Node::new(NodeKind::Condition, Point::new(100.0, 200.0));
        let json = serde_json::to_value(&node).expect("serialize");

        assert_eq!(json["type"], "condition");
        assert_eq!(json["position"]["x"], 100.0);
        assert_eq!(json["data"]["comparator"], "equals");
        assert!(json["data"]["condition"].as_str().is_some());
    }

    #[test]
    fn node_serde_roundtrip() {
        let node = Node::new(NodeKind::Metric, Point::new(10.0, 20.0));
        let json = serde_json::to_string(&node).expect("serialize");
        let parsed: Node = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(node, parsed);
    }

    #[test]
    fn node_deserializes_camel_case_data() {
        let json = serde_json::json!({
            "id": cognito_canvas_core::NodeId::new(),
            "type": "hitl",
            "position": {"x": 0.0, "y": 0.0},
            "data": {"reviewType": "edit", "instructions": "check tone", "timeout": 8}
        });
        let node: Node = serde_json::from_value(json).expect("deserialize");
        let NodeConfig::Hitl {
            review_type,
            timeout_hours,
            ..
        } = node.config
        else {
            panic!("expected hitl node");
        };
        assert_eq!(review_type, ReviewKind::Edit);
        assert_eq!(timeout_hours, 8);
    }
}

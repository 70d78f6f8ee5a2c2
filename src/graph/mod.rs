//! Node/edge graph produced by the compilers and consumed by graph widgets.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub mod layout;
pub mod view;

pub use layout::{Lane, LayoutCursor, Position};
pub use view::{EdgeChange, GraphView, NodeChange};

/// Label carried by the two edges leaving an `If` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BranchLabel {
    Yes,
    No,
}

impl BranchLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BranchLabel::Yes => "Yes",
            BranchLabel::No => "No",
        }
    }
}

impl fmt::Display for BranchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub label: String,
}

/// A positioned node. `raw` keeps the full source record for the inspector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub position: Position,
    pub data: NodeData,
    pub raw: Value,
}

impl GraphNode {
    pub fn label(&self) -> &str {
        &self.data.label
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeStyle {
    pub stroke: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub animated: bool,
    pub style: EdgeStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl GraphEdge {
    /// Edge ids are a pure function of the endpoints.
    pub fn edge_id(source: &str, target: &str) -> String {
        format!("e{}-{}", source, target)
    }

    pub fn new(source: &str, target: &str, stroke: &str) -> Self {
        Self {
            id: Self::edge_id(source, target),
            source: source.to_string(),
            target: target.to_string(),
            animated: true,
            style: EdgeStyle {
                stroke: stroke.to_string(),
            },
            label: None,
        }
    }

    pub fn with_label(mut self, label: Option<BranchLabel>) -> Self {
        self.label = label.map(|l| l.as_str().to_string());
        self
    }

    pub fn connects(&self, source: &str, target: &str) -> bool {
        self.source == source && self.target == target
    }
}

/// Compiler output: nodes and edges in emission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge_between(&self, source: &str, target: &str) -> Option<&GraphEdge> {
        self.edges.iter().find(|e| e.connects(source, target))
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edge_between(source, target).is_some()
    }
}

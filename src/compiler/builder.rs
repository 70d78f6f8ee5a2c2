use crate::graph::{BranchLabel, Graph, GraphEdge, GraphNode, NodeData, Position};
use ahash::AHashSet;
use serde_json::Value;

/// Accumulates nodes and edges in emission order.
pub(super) struct GraphBuilder {
    graph: Graph,
    emitted: AHashSet<String>,
    stroke: String,
}

impl GraphBuilder {
    pub(super) fn new(stroke: &str) -> Self {
        Self {
            graph: Graph::default(),
            emitted: AHashSet::new(),
            stroke: stroke.to_string(),
        }
    }

    pub(super) fn node(&mut self, id: String, position: Position, label: String, raw: Value) {
        if !self.emitted.insert(id.clone()) {
            tracing::warn!(node_id = %id, "duplicate node id emitted");
        }
        self.graph.nodes.push(GraphNode {
            id,
            position,
            data: NodeData { label },
            raw,
        });
    }

    pub(super) fn edge(&mut self, source: &str, target: &str, label: Option<BranchLabel>) {
        self.graph
            .edges
            .push(GraphEdge::new(source, target, &self.stroke).with_label(label));
    }

    pub(super) fn finish(self) -> Graph {
        tracing::debug!(
            nodes = self.graph.nodes.len(),
            edges = self.graph.edges.len(),
            "graph compiled"
        );
        self.graph
    }
}

use super::{Graph, GraphEdge, GraphNode, Position};

/// A mutation reported by a graph widget for a node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeChange {
    Position { id: String, position: Position },
    Remove { id: String },
}

/// A mutation reported by a graph widget for an edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeChange {
    Remove { id: String },
}

/// Controlled state of one graph pane.
///
/// Compiler output replaces the whole graph; user interaction only edits
/// this local copy and is never written back to the documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphView {
    graph: Graph,
    stroke: String,
}

impl GraphView {
    pub fn new(stroke: &str) -> Self {
        Self {
            graph: Graph::default(),
            stroke: stroke.to_string(),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.graph.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.graph.edges
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.graph.node(id)
    }

    /// Replaces nodes and edges wholesale.
    pub fn replace(&mut self, graph: Graph) {
        self.graph = graph;
    }

    /// Adds an edge drawn by the user. Returns `false` when the pair is
    /// already connected.
    pub fn connect(&mut self, source: &str, target: &str) -> bool {
        if self.graph.has_edge(source, target) {
            return false;
        }
        self.graph
            .edges
            .push(GraphEdge::new(source, target, &self.stroke));
        true
    }

    pub fn apply_node_changes(&mut self, changes: impl IntoIterator<Item = NodeChange>) {
        for change in changes {
            match change {
                NodeChange::Position { id, position } => {
                    if let Some(node) = self.graph.nodes.iter_mut().find(|n| n.id == id) {
                        node.position = position;
                    }
                }
                NodeChange::Remove { id } => {
                    self.graph.nodes.retain(|n| n.id != id);
                    self.graph
                        .edges
                        .retain(|e| e.source != id && e.target != id);
                }
            }
        }
    }

    pub fn apply_edge_changes(&mut self, changes: impl IntoIterator<Item = EdgeChange>) {
        for change in changes {
            match change {
                EdgeChange::Remove { id } => self.graph.edges.retain(|e| e.id != id),
            }
        }
    }
}

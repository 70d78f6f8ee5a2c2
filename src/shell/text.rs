use super::{Frontend, GraphWidget, Inspector, Pane};
use crate::graph::Graph;
use itertools::Itertools;
use serde_json::Value;
use std::fmt::Write;

/// Renders the shell into plain text, one section per pane.
#[derive(Debug, Default)]
pub struct TextFrontend {
    output: String,
    detail_started: bool,
}

impl TextFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_string(self) -> String {
        self.output
    }

    fn section(&mut self, pane: Pane) {
        let _ = writeln!(
            self.output,
            "======== {} ({}%) ========",
            pane.name().to_uppercase(),
            pane.width_percent()
        );
    }
}

/// Formats a graph as one line per node followed by its outgoing edges.
pub fn format_graph(graph: &Graph) -> String {
    let mut output = String::new();
    if graph.nodes.is_empty() {
        output.push_str("(empty)\n");
        return output;
    }

    for node in &graph.nodes {
        let _ = writeln!(
            output,
            "{:>6}  {:<40} @ ({}, {})",
            node.id,
            node.label(),
            node.position.x,
            node.position.y
        );
        let outgoing = graph
            .edges
            .iter()
            .filter(|e| e.source == node.id)
            .map(|e| match &e.label {
                Some(label) => format!("{} [{}]", e.target, label),
                None => e.target.clone(),
            })
            .join(", ");
        if !outgoing.is_empty() {
            let _ = writeln!(output, "{:>6}  -> {}", "", outgoing);
        }
    }
    output
}

impl GraphWidget for TextFrontend {
    fn draw_graph(&mut self, pane: Pane, graph: &Graph) {
        self.section(pane);
        self.output.push_str(&format_graph(graph));
        self.output.push('\n');
    }
}

impl Inspector for TextFrontend {
    fn inspect(&mut self, heading: &str, record: &Value, theme: &str) {
        if !self.detail_started {
            self.section(Pane::Detail);
            self.detail_started = true;
        }
        let body = serde_json::to_string_pretty(record).unwrap_or_else(|_| record.to_string());
        let _ = writeln!(self.output, "--- {} [{}] ---\n{}\n", heading, theme, body);
    }
}

impl Frontend for TextFrontend {
    fn show_status(&mut self, message: &str) {
        self.output.push_str(message);
        self.output.push('\n');
    }
}

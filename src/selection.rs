//! Cross-links task selection to the instruction graph.
//!
//! Each task selection bumps a generation counter. A fetched instruction
//! document is only applied when it belongs to the latest generation, so a
//! slow response for an earlier selection can never overwrite a newer one.

use crate::compiler::GraphCompiler;
use crate::error::FetchError;
use crate::graph::{GraphNode, GraphView};
use crate::plan::InstructionDocument;
use crate::source::{DocumentPath, DocumentSource};
use serde_json::Value;

/// Ticket for an instruction fetch started by a task selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    generation: u64,
    task_id: String,
}

impl PendingFetch {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }
}

/// What happened to a fetched instruction document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The instruction graph was replaced.
    Applied,
    /// A newer selection superseded this fetch; the result was discarded.
    Stale,
    /// Fetching, parsing or compiling failed. The previous graph is kept.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct SelectionCoordinator {
    compiler: GraphCompiler,
    selected_task: Option<GraphNode>,
    selected_instruction: Option<GraphNode>,
    generation: u64,
    instructions: GraphView,
}

impl SelectionCoordinator {
    pub fn new(compiler: GraphCompiler) -> Self {
        let instructions = GraphView::new(compiler.instruction_edge_color());
        Self {
            compiler,
            selected_task: None,
            selected_instruction: None,
            generation: 0,
            instructions,
        }
    }

    pub fn selected_task(&self) -> Option<&GraphNode> {
        self.selected_task.as_ref()
    }

    pub fn selected_instruction(&self) -> Option<&GraphNode> {
        self.selected_instruction.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn instructions(&self) -> &GraphView {
        &self.instructions
    }

    pub fn instructions_mut(&mut self) -> &mut GraphView {
        &mut self.instructions
    }

    /// Selects a task node. The instruction selection is cleared because the
    /// instruction graph is about to be replaced.
    pub fn select_task(&mut self, node: GraphNode) -> PendingFetch {
        self.generation += 1;
        let pending = PendingFetch {
            generation: self.generation,
            task_id: node.id.clone(),
        };
        tracing::debug!(task_id = %node.id, generation = self.generation, "task selected");
        self.selected_task = Some(node);
        self.selected_instruction = None;
        pending
    }

    /// Selects an instruction node. The task selection is left alone.
    pub fn select_instruction(&mut self, node: GraphNode) {
        self.selected_instruction = Some(node);
    }

    /// Applies the result of a fetch started by [`select_task`](Self::select_task).
    pub fn resolve(
        &mut self,
        pending: PendingFetch,
        result: Result<Value, FetchError>,
    ) -> FetchOutcome {
        if pending.generation != self.generation {
            tracing::debug!(
                task_id = %pending.task_id,
                generation = pending.generation,
                latest = self.generation,
                "discarding stale instruction document"
            );
            return FetchOutcome::Stale;
        }

        let document = result
            .map_err(|e| e.to_string())
            .and_then(|value| InstructionDocument::from_value(&value).map_err(|e| e.to_string()));

        match document {
            Ok(document) => {
                self.instructions
                    .replace(self.compiler.compile_document(&document));
                FetchOutcome::Applied
            }
            Err(message) => {
                tracing::error!(task_id = %pending.task_id, error = %message, "failed to load instructions");
                FetchOutcome::Failed(message)
            }
        }
    }

    /// Fetches the instruction document for a pending selection and applies it.
    pub async fn load<S: DocumentSource>(
        &mut self,
        source: &S,
        pending: PendingFetch,
    ) -> FetchOutcome {
        let result = source
            .fetch(DocumentPath::Instructions(pending.task_id.clone()))
            .await;
        self.resolve(pending, result)
    }

    pub async fn select_and_load<S: DocumentSource>(
        &mut self,
        source: &S,
        node: GraphNode,
    ) -> FetchOutcome {
        let pending = self.select_task(node);
        self.load(source, pending).await
    }
}

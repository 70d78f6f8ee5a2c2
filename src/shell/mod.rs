//! Presentation shell: two linked graph panes and a detail inspector.
//!
//! Rendering, pan/zoom and hit-testing belong to the frontend. The shell owns
//! the state those widgets are driven from and routes their events.

use crate::compiler::GraphCompiler;
use crate::error::ShellError;
use crate::graph::{EdgeChange, Graph, GraphView, NodeChange};
use crate::plan::PlanDocument;
use crate::selection::{FetchOutcome, SelectionCoordinator};
use crate::source::{DocumentPath, DocumentSource};
use crate::theme::Theme;
use serde_json::Value;

mod text;

pub use text::{TextFrontend, format_graph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pane {
    Tasks,
    Instructions,
    Detail,
}

impl Pane {
    pub const ALL: [Pane; 3] = [Pane::Tasks, Pane::Instructions, Pane::Detail];

    /// Share of the horizontal space.
    pub fn width_percent(&self) -> u8 {
        match self {
            Pane::Tasks => 20,
            Pane::Instructions | Pane::Detail => 40,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pane::Tasks => "tasks",
            Pane::Instructions => "instructions",
            Pane::Detail => "detail",
        }
    }
}

/// Renders a graph from its nodes and edges.
pub trait GraphWidget {
    fn draw_graph(&mut self, pane: Pane, graph: &Graph);
}

/// Renders an arbitrary structured record as an expandable tree.
pub trait Inspector {
    fn inspect(&mut self, heading: &str, record: &Value, theme: &str);
}

pub trait Frontend: GraphWidget + Inspector {
    /// Shown instead of the panes while loading or after a load failure.
    fn show_status(&mut self, message: &str);
}

/// Everything that exists once the plan has loaded.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub plan: PlanDocument,
    pub tasks: GraphView,
    pub selection: SelectionCoordinator,
}

#[derive(Debug, Clone)]
pub enum ShellState {
    Loading,
    Failed(String),
    Ready(Box<Workspace>),
}

pub struct Shell {
    theme: Theme,
    compiler: GraphCompiler,
    state: ShellState,
}

impl Shell {
    pub fn new(theme: Theme) -> Self {
        Self::with_compiler(theme, GraphCompiler::builder().with_theme(theme).build())
    }

    pub fn with_compiler(theme: Theme, compiler: GraphCompiler) -> Self {
        Self {
            theme,
            compiler,
            state: ShellState::Loading,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn workspace(&self) -> Result<&Workspace, ShellError> {
        match &self.state {
            ShellState::Ready(workspace) => Ok(workspace),
            _ => Err(ShellError::NotReady),
        }
    }

    fn workspace_mut(&mut self) -> Result<&mut Workspace, ShellError> {
        match &mut self.state {
            ShellState::Ready(workspace) => Ok(workspace),
            _ => Err(ShellError::NotReady),
        }
    }

    /// Loads the plan and compiles the task graph. A failure here is fatal
    /// for this mount and replaces the whole view with an error.
    pub async fn mount<S: DocumentSource>(&mut self, source: &S) {
        self.state = ShellState::Loading;
        let plan = match source.fetch(DocumentPath::Plan).await {
            Ok(value) => PlanDocument::from_value(value).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        self.state = match plan {
            Ok(plan) => {
                let mut tasks = GraphView::new(self.compiler.task_edge_color());
                tasks.replace(self.compiler.compile_plan(&plan));
                tracing::info!(tasks = plan.task_list.len(), "plan loaded");
                ShellState::Ready(Box::new(Workspace {
                    plan,
                    tasks,
                    selection: SelectionCoordinator::new(self.compiler.clone()),
                }))
            }
            Err(message) => {
                tracing::error!(error = %message, "failed to load plan");
                ShellState::Failed(message)
            }
        };
    }

    /// Handles a click on a task node: selects it and loads its instructions.
    pub async fn click_task_node<S: DocumentSource>(
        &mut self,
        source: &S,
        node_id: &str,
    ) -> Result<FetchOutcome, ShellError> {
        let workspace = self.workspace_mut()?;
        let node = workspace
            .tasks
            .node(node_id)
            .cloned()
            .ok_or_else(|| ShellError::NodeNotFound {
                pane: Pane::Tasks.name(),
                node_id: node_id.to_string(),
            })?;
        Ok(workspace.selection.select_and_load(source, node).await)
    }

    pub fn click_instruction_node(&mut self, node_id: &str) -> Result<(), ShellError> {
        let selection = &mut self.workspace_mut()?.selection;
        let node = selection
            .instructions()
            .node(node_id)
            .cloned()
            .ok_or_else(|| ShellError::NodeNotFound {
                pane: Pane::Instructions.name(),
                node_id: node_id.to_string(),
            })?;
        selection.select_instruction(node);
        Ok(())
    }

    pub fn view(&self, pane: Pane) -> Result<&GraphView, ShellError> {
        let workspace = self.workspace()?;
        match pane {
            Pane::Tasks => Ok(&workspace.tasks),
            Pane::Instructions => Ok(workspace.selection.instructions()),
            Pane::Detail => Err(ShellError::NotAGraphPane(pane.name())),
        }
    }

    fn view_mut(&mut self, pane: Pane) -> Result<&mut GraphView, ShellError> {
        let workspace = self.workspace_mut()?;
        match pane {
            Pane::Tasks => Ok(&mut workspace.tasks),
            Pane::Instructions => Ok(workspace.selection.instructions_mut()),
            Pane::Detail => Err(ShellError::NotAGraphPane(pane.name())),
        }
    }

    /// Adds an edge the user drew between two nodes of a pane.
    pub fn connect(&mut self, pane: Pane, source: &str, target: &str) -> Result<bool, ShellError> {
        Ok(self.view_mut(pane)?.connect(source, target))
    }

    pub fn apply_node_changes(
        &mut self,
        pane: Pane,
        changes: Vec<NodeChange>,
    ) -> Result<(), ShellError> {
        self.view_mut(pane)?.apply_node_changes(changes);
        Ok(())
    }

    pub fn apply_edge_changes(
        &mut self,
        pane: Pane,
        changes: Vec<EdgeChange>,
    ) -> Result<(), ShellError> {
        self.view_mut(pane)?.apply_edge_changes(changes);
        Ok(())
    }

    pub fn render<F: Frontend>(&self, frontend: &mut F) {
        let workspace = match &self.state {
            ShellState::Loading => return frontend.show_status("Loading..."),
            ShellState::Failed(message) => {
                return frontend.show_status(&format!("Error: {}", message));
            }
            ShellState::Ready(workspace) => workspace,
        };

        frontend.draw_graph(Pane::Tasks, workspace.tasks.graph());
        frontend.draw_graph(Pane::Instructions, workspace.selection.instructions().graph());

        let inspector_theme = self.theme.inspector_theme();
        if let Some(task) = workspace.selection.selected_task() {
            let heading = format!("Task #{}", task.raw["task_num"]);
            frontend.inspect(&heading, &task.raw, inspector_theme);
        }
        if let Some(instruction) = workspace.selection.selected_instruction() {
            let heading = format!("Instruction #{}", instruction.raw["seq"]);
            frontend.inspect(&heading, &instruction.raw, inspector_theme);
        }
    }
}

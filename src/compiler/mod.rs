use crate::graph::Graph;
use crate::plan::{Instruction, InstructionDocument, PlanDocument, Task, TaskDependency};
use crate::theme::{TASK_EDGE_COLOR, Theme};

mod builder;
mod instructions;
mod tasks;

use builder::GraphBuilder;

/// Vertical distance between two rows, shared by both graphs.
pub const ROW_PITCH: f64 = 150.0;
pub const TASK_ORIGIN_Y: f64 = 100.0;
pub const INSTRUCTION_ORIGIN_Y: f64 = 140.0;
/// Task nodes alternate between these two lanes by list index.
pub const TASK_EVEN_X: f64 = 130.0;
pub const TASK_ODD_X: f64 = 70.0;
pub const CENTER_LANE_X: f64 = 180.0;

/// Compiles plans and instruction documents into positioned graphs.
///
/// Compilation is pure: the same input always yields the same nodes and
/// edges, in the same order, with the same ids.
#[derive(Debug, Clone)]
pub struct GraphCompiler {
    task_edge_color: String,
    instruction_edge_color: String,
    drop_dangling_edges: bool,
}

pub struct GraphCompilerBuilder {
    task_edge_color: String,
    instruction_edge_color: String,
    drop_dangling_edges: bool,
}

impl GraphCompilerBuilder {
    pub fn new() -> Self {
        Self {
            task_edge_color: TASK_EDGE_COLOR.to_string(),
            instruction_edge_color: Theme::default().edge_color().to_string(),
            drop_dangling_edges: false,
        }
    }

    /// Takes the instruction edge color from a theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.instruction_edge_color = theme.edge_color().to_string();
        self
    }

    pub fn with_task_edge_color(mut self, color: &str) -> Self {
        self.task_edge_color = color.to_string();
        self
    }

    pub fn with_instruction_edge_color(mut self, color: &str) -> Self {
        self.instruction_edge_color = color.to_string();
        self
    }

    /// Drops dependency edges whose endpoints are not in the task list
    /// instead of emitting them dangling.
    pub fn drop_dangling_edges(mut self, drop: bool) -> Self {
        self.drop_dangling_edges = drop;
        self
    }

    pub fn build(self) -> GraphCompiler {
        GraphCompiler {
            task_edge_color: self.task_edge_color,
            instruction_edge_color: self.instruction_edge_color,
            drop_dangling_edges: self.drop_dangling_edges,
        }
    }
}

impl Default for GraphCompilerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for GraphCompiler {
    fn default() -> Self {
        GraphCompilerBuilder::new().build()
    }
}

impl GraphCompiler {
    pub fn builder() -> GraphCompilerBuilder {
        GraphCompilerBuilder::new()
    }

    pub fn task_edge_color(&self) -> &str {
        &self.task_edge_color
    }

    pub fn instruction_edge_color(&self) -> &str {
        &self.instruction_edge_color
    }

    pub fn compile_tasks(&self, tasks: &[Task], dependency: &TaskDependency) -> Graph {
        let builder = GraphBuilder::new(&self.task_edge_color);
        tasks::compile(builder, tasks, dependency, self.drop_dangling_edges)
    }

    pub fn compile_plan(&self, plan: &PlanDocument) -> Graph {
        self.compile_tasks(&plan.task_list, &plan.task_dependency)
    }

    pub fn compile_instructions(&self, instructions: &[Instruction]) -> Graph {
        let builder = GraphBuilder::new(&self.instruction_edge_color);
        instructions::compile(builder, instructions)
    }

    pub fn compile_document(&self, document: &InstructionDocument) -> Graph {
        self.compile_instructions(&document.instructions)
    }
}

/// Compiles a task list and its dependency map with default settings.
pub fn compile_task_graph(tasks: &[Task], dependency: &TaskDependency) -> Graph {
    GraphCompiler::default().compile_tasks(tasks, dependency)
}

/// Compiles an instruction sequence with default settings.
pub fn compile_instruction_graph(instructions: &[Instruction]) -> Graph {
    GraphCompiler::default().compile_instructions(instructions)
}

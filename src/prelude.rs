//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need to fetch, compile and present a plan.
//!
//! # Example
//!
//! ```rust,no_run
//! use planscope::prelude::*;
//!
//! # async fn run_example() -> Result<()> {
//! let config = Config::from_env()?;
//! let source = WorkspaceSource::new(&config.workspace_path);
//!
//! let mut shell = Shell::new(config.theme);
//! shell.mount(&source).await;
//! shell.click_task_node(&source, "1").await?;
//!
//! let mut frontend = TextFrontend::new();
//! shell.render(&mut frontend);
//! println!("{}", frontend.as_str());
//! # Ok(())
//! # }
//! ```

// Compilation
pub use crate::compiler::{GraphCompiler, compile_instruction_graph, compile_task_graph};

// Data model
pub use crate::plan::{
    Instruction, InstructionDocument, InstructionKind, PlanDocument, Task, TaskDependency, TaskId,
};

// Graph output
pub use crate::graph::{
    BranchLabel, EdgeChange, Graph, GraphEdge, GraphNode, GraphView, NodeChange, Position,
};

// Sources, selection and presentation
pub use crate::selection::{FetchOutcome, PendingFetch, SelectionCoordinator};
pub use crate::shell::{Frontend, GraphWidget, Inspector, Pane, Shell, ShellState, TextFrontend};
pub use crate::source::{DocumentPath, DocumentSource, WorkspaceSource};

// Configuration
pub use crate::config::Config;
pub use crate::theme::Theme;

// Error types
pub use crate::error::{CompileError, ConfigError, FetchError, ShellError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

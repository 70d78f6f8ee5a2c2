//! # Planscope - Execution Plan Graph Compiler
//!
//! **Planscope** turns a hierarchical execution plan into two linked node
//! graphs: a task-dependency graph, and for the selected task an instruction
//! graph in which `If` branches fan out and merge back and `Loop` bodies run
//! in their own lane before closing into the main sequence.
//!
//! ## Core Workflow
//!
//! 1.  **Fetch**: A [`DocumentSource`](source::DocumentSource) reads `plan.json`
//!     and `{task_num}.json` from a workspace directory or a static file server.
//! 2.  **Parse**: [`PlanDocument`](plan::PlanDocument) and
//!     [`InstructionDocument`](plan::InstructionDocument) turn the JSON into typed
//!     tasks and a closed instruction tree.
//! 3.  **Compile**: [`GraphCompiler`](compiler::GraphCompiler) lays both out on a
//!     fixed grid and emits nodes and edges with ids derived from `task_num`/`seq`.
//! 4.  **Present**: The [`Shell`](shell::Shell) keeps the graph state, routes
//!     selections through the [`SelectionCoordinator`](selection::SelectionCoordinator)
//!     and hands the result to a frontend.
//!
//! ## Quick Start
//!
//! ```rust
//! use planscope::prelude::*;
//! use serde_json::json;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let document = InstructionDocument::from_value(&json!({
//!     "instructions": [
//!         { "seq": 1, "type": "Shell", "objective": "checkout" },
//!         { "seq": 2, "type": "If", "objective": "tests pass?",
//!           "then": [{ "seq": 3, "type": "Shell", "objective": "deploy" }],
//!           "else": [{ "seq": 4, "type": "Shell", "objective": "report" }] },
//!         { "seq": 5, "type": "Shell", "objective": "clean up" }
//!     ]
//! }))?;
//!
//! let graph = compile_instruction_graph(&document.instructions);
//! assert_eq!(graph.nodes.len(), 5);
//! assert!(graph.has_edge("3", "5") && graph.has_edge("4", "5"));
//! assert!(!graph.has_edge("2", "5"));
//! # Ok(())
//! # }
//! ```

pub mod compiler;
pub mod config;
pub mod error;
pub mod graph;
pub mod plan;
pub mod prelude;
pub mod selection;
pub mod shell;
pub mod source;
pub mod theme;

use clap::{Parser, Subcommand, ValueEnum};
use planscope::prelude::*;
use planscope::shell::format_graph;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Compiles an execution plan and its instruction documents into node graphs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Workspace directory holding plan.json and the per-task documents
    #[arg(short, long, global = true)]
    workspace: Option<PathBuf>,

    /// Color scheme used for instruction edges and the inspector
    #[arg(long, global = true, default_value = "light")]
    theme: Theme,

    /// Log compiler and fetch activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile the task-dependency graph of the plan
    Tasks {
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Compile the instruction graph of one task
    Instructions {
        /// The task number whose instruction document is compiled
        task: TaskId,
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Render all panes, optionally with a task and an instruction selected
    Show {
        #[arg(long)]
        task: Option<TaskId>,
        #[arg(long, requires = "task")]
        instruction: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.workspace {
        Some(path) => Config::new(path),
        None => Config::from_env(),
    }
    .unwrap_or_else(|e| exit_with_error(&e.to_string()))
    .with_theme(cli.theme);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to start runtime: {}", e)));

    let source = WorkspaceSource::new(&config.workspace_path);
    tracing::debug!(workspace = %source.root().display(), theme = %config.theme, "configuration loaded");
    let compiler = GraphCompiler::builder().with_theme(config.theme).build();

    runtime.block_on(async {
        match cli.command {
            Command::Tasks { format } => run_tasks(&source, &compiler, format).await,
            Command::Instructions { task, format } => {
                run_instructions(&source, &compiler, task, format).await
            }
            Command::Show { task, instruction } => {
                run_show(&source, config.theme, task, instruction).await
            }
        }
    });
}

async fn run_tasks(source: &WorkspaceSource, compiler: &GraphCompiler, format: OutputFormat) {
    let value = source
        .fetch(DocumentPath::Plan)
        .await
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let plan = PlanDocument::from_value(value)
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid plan: {}", e)));

    let start = Instant::now();
    let graph = compiler.compile_plan(&plan);
    tracing::debug!(elapsed = ?start.elapsed(), "task graph compiled");

    print_graph(&graph, format);
}

async fn run_instructions(
    source: &WorkspaceSource,
    compiler: &GraphCompiler,
    task: TaskId,
    format: OutputFormat,
) {
    let value = source
        .fetch(DocumentPath::Instructions(task.to_string()))
        .await
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let document = InstructionDocument::from_value(&value)
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid instructions for task {}: {}", task, e)));

    let start = Instant::now();
    let graph = compiler.compile_document(&document);
    tracing::debug!(elapsed = ?start.elapsed(), "instruction graph compiled");

    print_graph(&graph, format);
}

async fn run_show(
    source: &WorkspaceSource,
    theme: Theme,
    task: Option<TaskId>,
    instruction: Option<u64>,
) {
    let mut shell = Shell::new(theme);
    shell.mount(source).await;

    if let Some(task) = task {
        match shell.click_task_node(source, &task.to_string()).await {
            Ok(FetchOutcome::Failed(message)) => {
                eprintln!("Warning: instructions for task {} unavailable: {}", task, message)
            }
            Ok(_) => {}
            Err(e) => exit_with_error(&e.to_string()),
        }
    }
    if let Some(seq) = instruction {
        if let Err(e) = shell.click_instruction_node(&seq.to_string()) {
            exit_with_error(&e.to_string());
        }
    }

    let mut frontend = TextFrontend::new();
    shell.render(&mut frontend);
    print!("{}", frontend.into_string());

    if let ShellState::Failed(_) = shell.state() {
        std::process::exit(1);
    }
}

fn print_graph(graph: &Graph, format: OutputFormat) {
    match format {
        OutputFormat::Text => print!("{}", format_graph(graph)),
        OutputFormat::Json => match serde_json::to_string_pretty(graph) {
            Ok(json) => println!("{}", json),
            Err(e) => exit_with_error(&format!("Failed to serialize graph: {}", e)),
        },
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}

use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;

/// A CLI tool to generate a sample plan workspace for planscope
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The directory to write plan.json and the task documents to
    #[arg(short, long, default_value = "workspace")]
    output: PathBuf,

    /// Number of tasks in the plan
    #[arg(long, default_value_t = 6)]
    tasks: u64,

    /// Maximum number of top-level instructions per task
    #[arg(long, default_value_t = 8)]
    max_instructions: usize,
}

const STEP_TYPES: [&str; 4] = ["Shell", "ReadFile", "WriteFile", "Http"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.tasks == 0 || cli.max_instructions == 0 {
        eprintln!("Error: --tasks and --max-instructions must be at least 1");
        std::process::exit(1);
    }

    fs::create_dir_all(&cli.output)?;
    println!(
        "Generating plan with {} task(s) into '{}'...",
        cli.tasks,
        cli.output.display()
    );

    let plan = generate_plan(&mut rng, cli.tasks);
    fs::write(
        cli.output.join("plan.json"),
        serde_json::to_string_pretty(&plan)?,
    )?;

    for task_num in 1..=cli.tasks {
        let count = rng.random_range(1..=cli.max_instructions);
        let document = json!({ "instructions": generate_instructions(&mut rng, count) });
        fs::write(
            cli.output.join(format!("{}.json", task_num)),
            serde_json::to_string_pretty(&document)?,
        )?;
        println!("-> Task {}: {} top-level instruction(s).", task_num, count);
    }

    println!(
        "Successfully generated workspace at '{}'",
        cli.output.display()
    );
    Ok(())
}

/// Each task after the first depends on one or two earlier tasks.
fn generate_plan(rng: &mut ThreadRng, tasks: u64) -> Value {
    let task_list: Vec<Value> = (1..=tasks)
        .map(|n| json!({ "task_num": n, "task": format!("Generated task {}", n) }))
        .collect();

    let mut dependency = serde_json::Map::new();
    for target in 2..=tasks {
        let mut sources = vec![rng.random_range(1..target)];
        if target > 2 && rng.random_bool(0.3) {
            let extra = rng.random_range(1..target);
            if !sources.contains(&extra) {
                sources.push(extra);
            }
        }
        dependency.insert(target.to_string(), json!(sources));
    }

    json!({ "task_list": task_list, "task_dependency": dependency })
}

fn generate_instructions(rng: &mut ThreadRng, count: usize) -> Vec<Value> {
    let mut seq = 0u64;
    let mut next_seq = || {
        seq += 1;
        seq
    };

    let mut instructions = Vec::with_capacity(count);
    for _ in 0..count {
        let roll = rng.random_range(0..10);
        let instruction = match roll {
            0 | 1 => {
                let id = next_seq();
                json!({
                    "seq": id,
                    "type": "If",
                    "objective": format!("Check condition {}", id),
                    "args": {},
                    "then": [step(rng, next_seq())],
                    "else": [step(rng, next_seq())],
                })
            }
            2 => {
                let id = next_seq();
                let body_len = rng.random_range(1..=3);
                let body: Vec<Value> = (0..body_len).map(|_| step(rng, next_seq())).collect();
                json!({
                    "seq": id,
                    "type": "Loop",
                    "objective": format!("Repeat block {}", id),
                    "args": { "instructions": body },
                })
            }
            _ => step(rng, next_seq()),
        };
        instructions.push(instruction);
    }
    instructions
}

fn step(rng: &mut ThreadRng, seq: u64) -> Value {
    let kind = STEP_TYPES[rng.random_range(0..STEP_TYPES.len())];
    json!({
        "seq": seq,
        "type": kind,
        "objective": format!("{} step {}", kind, seq),
        "args": {},
    })
}

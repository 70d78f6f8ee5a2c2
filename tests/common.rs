//! Common test utilities for building plans, instruction documents and sources.
use planscope::prelude::*;
use serde_json::{Value, json};
use std::collections::HashMap;

/// A plain instruction record.
#[allow(dead_code)]
pub fn step(seq: u64, objective: &str) -> Value {
    json!({ "seq": seq, "type": "Shell", "objective": objective, "args": {} })
}

#[allow(dead_code)]
pub fn if_block(seq: u64, objective: &str, then: Vec<Value>, otherwise: Vec<Value>) -> Value {
    json!({ "seq": seq, "type": "If", "objective": objective, "args": {}, "then": then, "else": otherwise })
}

#[allow(dead_code)]
pub fn loop_block(seq: u64, objective: &str, body: Vec<Value>) -> Value {
    json!({ "seq": seq, "type": "Loop", "objective": objective, "args": { "instructions": body } })
}

/// Parses a list of instruction records into the typed tree.
#[allow(dead_code)]
pub fn instructions(records: Vec<Value>) -> Vec<Instruction> {
    InstructionDocument::from_value(&json!({ "instructions": records }))
        .expect("fixture instructions must parse")
        .instructions
}

/// Three tasks: 2 depends on 1, 3 depends on 1 and 2.
#[allow(dead_code)]
pub fn sample_plan_json() -> Value {
    json!({
        "task_list": [
            { "task_num": 1, "task": "Collect inputs", "tool": "fs" },
            { "task_num": 2, "task": "Transform data" },
            { "task_num": 3, "task": "Publish report" }
        ],
        "task_dependency": { "2": [1], "3": [1, 2] }
    })
}

#[allow(dead_code)]
pub fn sample_plan() -> PlanDocument {
    PlanDocument::from_value(sample_plan_json()).expect("fixture plan must parse")
}

/// Instructions for task 1: a step, a branch, and a trailing loop.
#[allow(dead_code)]
pub fn sample_instructions_json() -> Value {
    json!({
        "instructions": [
            step(1, "Read config"),
            if_block(2, "Config valid?", vec![step(3, "Apply")], vec![step(4, "Abort")]),
            loop_block(5, "For each file", vec![step(6, "Parse"), step(7, "Store")])
        ]
    })
}

/// An in-memory document source keyed by relative path.
#[allow(dead_code)]
#[derive(Default)]
pub struct MemorySource {
    documents: HashMap<String, Value>,
    failures: HashMap<String, u16>,
}

#[allow(dead_code)]
impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: &str, document: Value) -> Self {
        self.documents.insert(path.to_string(), document);
        self
    }

    /// Makes requests for `path` fail with the given status.
    pub fn with_status(mut self, path: &str, status: u16) -> Self {
        self.failures.insert(path.to_string(), status);
        self
    }

    /// A source serving the sample plan and the instructions of task 1.
    pub fn sample() -> Self {
        Self::new()
            .with_document("plan.json", sample_plan_json())
            .with_document("1.json", sample_instructions_json())
    }
}

impl DocumentSource for MemorySource {
    async fn fetch(&self, path: DocumentPath) -> std::result::Result<Value, FetchError> {
        let relative = path.relative_path()?;
        if let Some(status) = self.failures.get(&relative) {
            return Err(FetchError::Status {
                path: relative,
                status: *status,
            });
        }
        self.documents
            .get(&relative)
            .cloned()
            .ok_or(FetchError::NotFound(relative))
    }
}

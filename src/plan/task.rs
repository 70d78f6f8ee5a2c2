use crate::error::CompileError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Stable identifier of a task within a plan.
pub type TaskId = u64;

/// Maps a target task to the tasks that must precede it.
///
/// Keys iterate in ascending numeric order, which fixes the emission order
/// of dependency edges.
pub type TaskDependency = BTreeMap<TaskId, Vec<TaskId>>;

/// A unit of work in the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub task_num: TaskId,
    pub task: String,
    /// Every other field of the record, kept for the detail inspector.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    pub fn new(task_num: TaskId, task: impl Into<String>) -> Self {
        Self {
            task_num,
            task: task.into(),
            extra: Map::new(),
        }
    }

    /// The full original record as JSON.
    pub fn to_value(&self) -> Value {
        let mut record = self.extra.clone();
        record.insert("task_num".to_string(), Value::from(self.task_num));
        record.insert("task".to_string(), Value::from(self.task.clone()));
        Value::Object(record)
    }
}

/// The top-level plan document served as `plan.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanDocument {
    pub task_list: Vec<Task>,
    #[serde(default)]
    pub task_dependency: TaskDependency,
}

impl PlanDocument {
    pub fn from_value(value: Value) -> Result<Self, CompileError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CompileError> {
        Ok(serde_json::from_str(json)?)
    }
}

use crate::error::CompileError;
use serde_json::{Map, Value, json};

/// The type tag of a synthesized loop end.
pub const LOOP_END_TYPE: &str = "LoopEnd";

/// One step of a task's execution.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub seq: u64,
    pub objective: String,
    pub kind: InstructionKind,
    /// The original record, shown by the detail inspector.
    pub raw: Value,
}

/// The closed set of instruction shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum InstructionKind {
    /// Any plain instruction; `type_name` is its original `type` tag.
    Step { type_name: String },
    If {
        then: Vec<Instruction>,
        otherwise: Vec<Instruction>,
    },
    Loop { body: Vec<Instruction> },
    LoopEnd,
}

impl Instruction {
    /// Builds the synthesized marker closing a trailing loop.
    pub fn virtual_loop_end(seq: u64) -> Self {
        Self {
            seq,
            objective: "End of Loop".to_string(),
            kind: InstructionKind::LoopEnd,
            raw: json!({
                "seq": seq,
                "type": LOOP_END_TYPE,
                "objective": "End of Loop",
                "args": {},
            }),
        }
    }

    pub fn type_name(&self) -> &str {
        match &self.kind {
            InstructionKind::Step { type_name } => type_name,
            InstructionKind::If { .. } => "If",
            InstructionKind::Loop { .. } => "Loop",
            InstructionKind::LoopEnd => LOOP_END_TYPE,
        }
    }

    /// Largest `seq` found in this instruction and everything nested below it.
    pub fn max_seq(&self) -> u64 {
        let nested = match &self.kind {
            InstructionKind::If { then, otherwise } => {
                then.iter().chain(otherwise).map(Instruction::max_seq).max()
            }
            InstructionKind::Loop { body } => body.iter().map(Instruction::max_seq).max(),
            InstructionKind::Step { .. } | InstructionKind::LoopEnd => None,
        };
        nested.map_or(self.seq, |n| n.max(self.seq))
    }

    /// Number of graph nodes this instruction expands to.
    pub fn node_count(&self) -> usize {
        1 + match &self.kind {
            InstructionKind::If { then, otherwise } => {
                then.iter().chain(otherwise).map(Instruction::node_count).sum()
            }
            InstructionKind::Loop { body } => body.iter().map(Instruction::node_count).sum(),
            InstructionKind::Step { .. } | InstructionKind::LoopEnd => 0,
        }
    }

    /// Parses a single instruction record, recursing into branch arms and loop bodies.
    pub fn from_value(value: &Value) -> Result<Self, CompileError> {
        let record = value.as_object().ok_or_else(|| CompileError::MalformedInstruction {
            seq: None,
            message: "instruction is not an object".to_string(),
        })?;

        let seq = record
            .get("seq")
            .and_then(Value::as_u64)
            .ok_or_else(|| CompileError::MalformedInstruction {
                seq: None,
                message: "missing or non-integer 'seq'".to_string(),
            })?;
        let malformed = |message: &str| CompileError::MalformedInstruction {
            seq: Some(seq),
            message: message.to_string(),
        };

        let type_name = record
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| malformed("missing 'type'"))?;
        let objective = record
            .get("objective")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let kind = match type_name {
            "If" => {
                let then = arm(record, "then").ok_or_else(|| malformed("missing 'then' array"))?;
                let otherwise =
                    arm(record, "else").ok_or_else(|| malformed("missing 'else' array"))?;
                InstructionKind::If {
                    then: parse_sequence(then)?,
                    otherwise: parse_sequence(otherwise)?,
                }
            }
            "Loop" => {
                let body = record
                    .get("args")
                    .and_then(Value::as_object)
                    .and_then(|args| args.get("instructions"))
                    .and_then(Value::as_array)
                    .ok_or_else(|| malformed("missing 'args.instructions' array"))?;
                InstructionKind::Loop {
                    body: parse_sequence(body)?,
                }
            }
            LOOP_END_TYPE => InstructionKind::LoopEnd,
            other => InstructionKind::Step {
                type_name: other.to_string(),
            },
        };

        Ok(Self {
            seq,
            objective,
            kind,
            raw: value.clone(),
        })
    }
}

fn arm<'a>(record: &'a Map<String, Value>, key: &str) -> Option<&'a Vec<Value>> {
    record.get(key).and_then(Value::as_array)
}

fn parse_sequence(items: &[Value]) -> Result<Vec<Instruction>, CompileError> {
    items.iter().map(Instruction::from_value).collect()
}

/// A task's instruction document, served as `{task_num}.json`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstructionDocument {
    pub instructions: Vec<Instruction>,
}

impl InstructionDocument {
    pub fn from_value(value: &Value) -> Result<Self, CompileError> {
        let items = value
            .get("instructions")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                CompileError::InvalidDocument("missing 'instructions' array".to_string())
            })?;
        Ok(Self {
            instructions: parse_sequence(items)?,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CompileError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_kinds() {
        let doc = InstructionDocument::from_value(&json!({
            "instructions": [
                { "seq": 1, "type": "Shell", "objective": "prepare", "args": {} },
                { "seq": 2, "type": "If", "objective": "check",
                  "then": [{ "seq": 3, "type": "Shell", "objective": "yes" }],
                  "else": [{ "seq": 4, "type": "Shell", "objective": "no" }] },
                { "seq": 5, "type": "Loop", "objective": "each",
                  "args": { "instructions": [{ "seq": 6, "type": "Shell", "objective": "body" }] } }
            ]
        }))
        .unwrap();

        assert_eq!(doc.instructions.len(), 3);
        assert_eq!(doc.instructions[0].type_name(), "Shell");
        assert!(matches!(doc.instructions[1].kind, InstructionKind::If { .. }));
        assert_eq!(doc.instructions[2].max_seq(), 6);
        assert_eq!(doc.instructions[1].node_count(), 3);
    }

    #[test]
    fn if_without_else_is_malformed() {
        let err = Instruction::from_value(&json!({
            "seq": 7, "type": "If", "objective": "check", "then": []
        }))
        .unwrap_err();
        assert_eq!(
            err,
            CompileError::MalformedInstruction {
                seq: Some(7),
                message: "missing 'else' array".to_string()
            }
        );
    }

    #[test]
    fn loop_without_body_is_malformed() {
        let err = Instruction::from_value(&json!({
            "seq": 3, "type": "Loop", "objective": "each", "args": {}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("#3"));
        assert!(err.to_string().contains("args.instructions"));
    }

    #[test]
    fn missing_objective_defaults_to_empty() {
        let inst = Instruction::from_value(&json!({ "seq": 1, "type": "Noop" })).unwrap();
        assert_eq!(inst.objective, "");
    }
}

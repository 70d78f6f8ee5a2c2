use super::builder::GraphBuilder;
use super::{CENTER_LANE_X, INSTRUCTION_ORIGIN_Y, ROW_PITCH};
use crate::graph::{BranchLabel, Graph, Lane, LayoutCursor};
use crate::plan::{Instruction, InstructionKind};
use std::slice;

/// A node whose outgoing edge is waiting for the next emitted node.
#[derive(Debug, Clone, PartialEq)]
struct PendingExit {
    source: String,
    label: Option<BranchLabel>,
}

impl PendingExit {
    fn plain(source: &str) -> Self {
        Self {
            source: source.to_string(),
            label: None,
        }
    }

    fn labeled(source: &str, label: BranchLabel) -> Self {
        Self {
            source: source.to_string(),
            label: Some(label),
        }
    }
}

/// Recursive descent over the instruction tree.
///
/// Every sub-sequence returns the exits still waiting for a successor; the
/// next node emitted in the enclosing sequence consumes all of them. This is
/// what merges both arms of an `If` and closes a loop body back into the
/// main sequence.
struct SequenceWalker {
    builder: GraphBuilder,
    cursor: LayoutCursor,
}

impl SequenceWalker {
    fn walk(
        &mut self,
        sequence: &[Instruction],
        lane: Lane,
        mut pending: Vec<PendingExit>,
    ) -> Vec<PendingExit> {
        for instruction in sequence {
            pending = self.emit(instruction, lane, pending);
        }
        pending
    }

    fn emit(
        &mut self,
        instruction: &Instruction,
        lane: Lane,
        incoming: Vec<PendingExit>,
    ) -> Vec<PendingExit> {
        let id = instruction.seq.to_string();
        self.builder.node(
            id.clone(),
            self.cursor.position(lane),
            node_label(instruction),
            instruction.raw.clone(),
        );
        for exit in incoming {
            self.builder.edge(&exit.source, &id, exit.label);
        }
        self.cursor.advance();

        match &instruction.kind {
            InstructionKind::Step { .. } | InstructionKind::LoopEnd => vec![PendingExit::plain(&id)],
            InstructionKind::If { then, otherwise } if then.is_empty() && otherwise.is_empty() => {
                // Two labeled edges to the same successor would share one id.
                vec![PendingExit::plain(&id)]
            }
            InstructionKind::If { then, otherwise } => {
                // Both arms start on the same row; the sequence resumes below the longer one.
                let arm_start = self.cursor.row();
                let mut exits = self.walk(
                    then,
                    lane.then_arm(),
                    vec![PendingExit::labeled(&id, BranchLabel::Yes)],
                );
                let then_end = self.cursor.row();

                self.cursor.seek(arm_start);
                exits.extend(self.walk(
                    otherwise,
                    lane.else_arm(),
                    vec![PendingExit::labeled(&id, BranchLabel::No)],
                ));
                let else_end = self.cursor.row();

                self.cursor.seek(then_end.max(else_end));
                exits
            }
            InstructionKind::Loop { body } => {
                self.walk(body, lane.loop_body(), vec![PendingExit::plain(&id)])
            }
        }
    }
}

fn node_label(instruction: &Instruction) -> String {
    match instruction.kind {
        InstructionKind::LoopEnd => "Loop End".to_string(),
        InstructionKind::Loop { .. } => format!("Loop: {}", instruction.objective),
        InstructionKind::Step { .. } | InstructionKind::If { .. } => instruction.objective.clone(),
    }
}

/// A trailing loop has no successor to close into, so a virtual end marker
/// is appended after it.
fn trailing_loop_end(instructions: &[Instruction]) -> Option<Instruction> {
    match instructions.last() {
        Some(last) if matches!(last.kind, InstructionKind::Loop { .. }) => {
            Some(Instruction::virtual_loop_end(last.max_seq() + 1))
        }
        _ => None,
    }
}

pub(super) fn compile(builder: GraphBuilder, instructions: &[Instruction]) -> Graph {
    let mut walker = SequenceWalker {
        builder,
        cursor: LayoutCursor::new(INSTRUCTION_ORIGIN_Y, ROW_PITCH),
    };
    let center = Lane::new(CENTER_LANE_X);

    let pending = walker.walk(instructions, center, Vec::new());
    if let Some(loop_end) = trailing_loop_end(instructions) {
        walker.walk(slice::from_ref(&loop_end), center, pending);
    }

    walker.builder.finish()
}

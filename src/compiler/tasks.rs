use super::builder::GraphBuilder;
use super::{ROW_PITCH, TASK_EVEN_X, TASK_ODD_X, TASK_ORIGIN_Y};
use crate::graph::{Graph, Lane, LayoutCursor};
use crate::plan::{Task, TaskDependency, TaskId};
use ahash::AHashSet;

/// One node per task, one edge per `(source, target)` dependency pair.
///
/// Lanes alternate by list index, not by `task_num`, so consecutive tasks
/// never overlap.
pub(super) fn compile(
    mut builder: GraphBuilder,
    tasks: &[Task],
    dependency: &TaskDependency,
    drop_dangling: bool,
) -> Graph {
    let mut cursor = LayoutCursor::new(TASK_ORIGIN_Y, ROW_PITCH);
    for (index, task) in tasks.iter().enumerate() {
        let lane = Lane::new(if index % 2 == 0 { TASK_EVEN_X } else { TASK_ODD_X });
        builder.node(
            task.task_num.to_string(),
            cursor.position(lane),
            format!("Task {}: {}", task.task_num, task.task),
            task.to_value(),
        );
        cursor.advance();
    }

    let known: AHashSet<TaskId> = tasks.iter().map(|t| t.task_num).collect();
    let pairs = dependency
        .iter()
        .flat_map(|(target, sources)| sources.iter().map(move |source| (*source, *target)));

    for (source, target) in pairs {
        let dangling = !known.contains(&source) || !known.contains(&target);
        if dangling {
            if drop_dangling {
                tracing::warn!(source, target, "dropping dependency on unknown task");
                continue;
            }
            tracing::warn!(source, target, "dependency references unknown task");
        }
        builder.edge(&source.to_string(), &target.to_string(), None);
    }

    builder.finish()
}

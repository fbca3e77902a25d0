//! Uniformity check of task namespaces.
//!
//! All tasks are compared against the task leader: every task must be
//! attached to exactly the same namespace types and IDs as the leader.

use namspill_common::error::{NamspillError, Result};
use namspill_common::types::Task;

use crate::format::format_tasks;

static ZERO_TASK: Task = Task::zero();

/// Returns the first task flagged as task leader.
///
/// Without a leader the zero task is returned; having no namespaces, it
/// makes any check against it fail, as uniformity has no anchor then.
pub fn leader_task(tasks: &[Task]) -> &Task {
    tasks
        .iter()
        .find(|task| task.is_leader())
        .unwrap_or(&ZERO_TASK)
}

/// Checks whether all tasks share the task leader's namespaces.
///
/// Tasks with the same TID as the leader are not compared. A task is
/// uniform when it has as many namespaces as the leader and the same ID for
/// each of the leader's namespace types.
///
/// # Errors
///
/// Returns `NamspillError::InvalidInput` if `tasks` is empty.
pub fn is_uniformly_namespaced(tasks: &[Task]) -> Result<bool> {
    if tasks.is_empty() {
        return Err(NamspillError::InvalidInput {
            message: format!("uniformity check expects a non-empty list of tasks, got: {tasks:?}"),
        });
    }
    let leader = leader_task(tasks);
    for task in tasks.iter().filter(|task| task.tid() != leader.tid()) {
        if task.namespaces().len() != leader.namespaces().len() {
            tracing::trace!(
                tid = task.tid(),
                leader = leader.tid(),
                "namespace count differs from leader"
            );
            return Ok(false);
        }
        for (typ, &nsid) in leader.namespaces() {
            if task.namespace(typ) != Some(nsid) {
                tracing::trace!(
                    tid = task.tid(),
                    leader = leader.tid(),
                    typ = %typ,
                    "namespace differs from leader"
                );
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// Explains why `tasks` were expected to be uniformly namespaced.
#[must_use]
pub fn failure_message(tasks: &[Task]) -> String {
    format!(
        "Expected\n{}\nto have uniform namespace IDs per task",
        format_tasks(tasks, 1)
    )
}

/// Explains why `tasks` were expected not to be uniformly namespaced.
#[must_use]
pub fn negated_failure_message(tasks: &[Task]) -> String {
    format!(
        "Expected\n{}\nnot to have uniform namespace IDs per task",
        format_tasks(tasks, 1)
    )
}

/// Succeeds if all tasks share the task leader's namespaces.
///
/// # Errors
///
/// Returns `NamspillError::NotUniform`, carrying a rendering of all
/// tasks, if namespaces diverge; `NamspillError::InvalidInput` if `tasks`
/// is empty.
pub fn ensure_uniformly_namespaced(tasks: &[Task]) -> Result<()> {
    if is_uniformly_namespaced(tasks)? {
        Ok(())
    } else {
        Err(NamspillError::NotUniform {
            report: failure_message(tasks),
        })
    }
}

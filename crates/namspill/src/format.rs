//! Multi-line rendering of task lists for diagnostics.

use namspill_common::constants::INDENT;
use namspill_common::types::Task;

use crate::uniformity::leader_task;

/// Renders `tasks` one per line, indented by `indentation` units.
///
/// The task leader always comes first, followed by all other tasks in
/// ascending TID order.
#[must_use]
pub fn format_tasks(tasks: &[Task], indentation: usize) -> String {
    let indent = INDENT.repeat(indentation);
    let mut others: Vec<&Task> = tasks.iter().filter(|task| !task.is_leader()).collect();
    others.sort_by_key(|task| task.tid());

    let mut lines = Vec::with_capacity(others.len() + 1);
    lines.push(format!("{indent}{}", leader_task(tasks)));
    lines.extend(others.into_iter().map(|task| format!("{indent}{task}")));
    lines.join("\n")
}

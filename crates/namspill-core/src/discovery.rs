//! Point-in-time discovery of a process' tasks and their namespaces.
//!
//! Each pass re-reads procfs; nothing is cached between calls. Tasks may
//! come and go while a pass is running: a task that vanishes between being
//! listed and having its namespaces resolved is simply left out. This also
//! applies to the task leader, no other task is promoted in its place.
//!
//! Callers that need a consistent snapshot across all tasks have to keep
//! other threads from spawning tasks or switching namespaces meanwhile.

use namspill_common::config::DiscoveryConfig;
use namspill_common::types::Task;

use crate::procfs::{ProcFs, TaskIds};

/// Returns the tasks currently belonging to the calling process.
///
/// Returns `None` if the tasks cannot be determined, for instance because
/// the process' task directory is unreadable.
pub fn tasks() -> Option<Vec<Task>> {
    discover(&ProcFs::default(), current_pid()?)
}

/// Returns the task IDs of the calling process together with the task
/// leader's ID, or `None` if they cannot be determined.
pub fn task_ids() -> Option<TaskIds> {
    ProcFs::default().task_ids(current_pid()?)
}

/// Discovers tasks as described by `config`.
pub fn discover_with(config: &DiscoveryConfig) -> Option<Vec<Task>> {
    let pid = match config.pid {
        Some(pid) => pid,
        None => current_pid()?,
    };
    discover(&ProcFs::new(&config.proc_root), pid)
}

/// Discovers the tasks of process `pid` from `procfs`.
///
/// Returns `None` if the task listing is unavailable, or if not a single
/// listed task could be resolved.
pub fn discover(procfs: &ProcFs, pid: u32) -> Option<Vec<Task>> {
    let Some(ids) = procfs.task_ids(pid) else {
        tracing::debug!(pid, root = %procfs.root().display(), "task listing unavailable");
        return None;
    };
    let tasks: Vec<Task> = ids
        .tids
        .iter()
        .filter_map(|&tid| procfs.task(ids.leader, tid))
        .collect();
    tracing::debug!(
        pid,
        listed = ids.tids.len(),
        resolved = tasks.len(),
        "discovered tasks"
    );
    if tasks.is_empty() {
        return None;
    }
    Some(tasks)
}

#[cfg(target_os = "linux")]
fn current_pid() -> Option<u32> {
    u32::try_from(nix::unistd::getpid().as_raw()).ok()
}

/// Procfs task discovery requires Linux.
#[cfg(not(target_os = "linux"))]
const fn current_pid() -> Option<u32> {
    None
}

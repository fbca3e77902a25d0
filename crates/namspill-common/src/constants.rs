//! System-wide constants and default paths.

/// Default procfs mount point.
pub const DEFAULT_PROC_ROOT: &str = "/proc";

/// Environment variable overriding the procfs mount point.
///
/// Only read by `DiscoveryConfig::from_env`; the plain `tasks()` and
/// `task_ids()` entry points always use [`DEFAULT_PROC_ROOT`].
pub const PROC_ROOT_ENV: &str = "NAMSPILL_PROC_ROOT";

/// Per-process directory listing the process' tasks.
pub const TASK_DIR: &str = "task";

/// Per-task directory holding the namespace links.
pub const NS_DIR: &str = "ns";

/// Suffix of namespace links describing a task's future children rather
/// than the task itself (`pid_for_children`, `time_for_children`).
pub const FOR_CHILDREN_SUFFIX: &str = "_for_children";

/// Indentation unit for nested multi-line task renderings.
pub const INDENT: &str = "    ";

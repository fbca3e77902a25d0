//! Task and namespace information read from a procfs instance.
//!
//! The procfs root is injected so that discovery can be pointed at a fake
//! tree instead of the live `/proc`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use namspill_common::constants::{DEFAULT_PROC_ROOT, FOR_CHILDREN_SUFFIX, NS_DIR, TASK_DIR};
use namspill_common::error::{NamspillError, Result};
use namspill_common::types::Task;

use crate::handle::parse_namespace_handle;

/// Task IDs of a process at the time of listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskIds {
    /// IDs of all listed tasks, ascending.
    pub tids: Vec<u32>,
    /// Task ID of the task leader, which equals the process ID.
    pub leader: u32,
}

/// Handle to a procfs mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcFs {
    root: PathBuf,
}

impl Default for ProcFs {
    fn default() -> Self {
        Self::new(DEFAULT_PROC_ROOT)
    }
}

impl ProcFs {
    /// Creates a handle for the procfs instance mounted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Mount point of this procfs instance.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns `<root>/<pid>/task`.
    #[must_use]
    pub fn task_dir(&self, pid: u32) -> PathBuf {
        self.root.join(pid.to_string()).join(TASK_DIR)
    }

    /// Returns `<root>/<pid>/task/<tid>/ns`.
    #[must_use]
    pub fn ns_dir(&self, pid: u32, tid: u32) -> PathBuf {
        self.task_dir(pid).join(tid.to_string()).join(NS_DIR)
    }

    /// Lists the task IDs of process `pid`.
    ///
    /// Returns `None` if the task directory cannot be read or is empty,
    /// which happens once the task leader has exited. Directory entries
    /// that are not valid task IDs are skipped.
    pub fn task_ids(&self, pid: u32) -> Option<TaskIds> {
        let entries: Vec<_> = std::fs::read_dir(self.task_dir(pid)).ok()?.collect();
        if entries.is_empty() {
            return None;
        }
        let mut tids: Vec<u32> = entries
            .into_iter()
            .filter_map(|entry| entry.ok()?.file_name().to_str().and_then(parse_tid))
            .collect();
        tids.sort_unstable();
        Some(TaskIds { tids, leader: pid })
    }

    /// Snapshots task `tid` of process `pid` together with its namespaces.
    ///
    /// Returns `None` if any of the task's namespace links cannot be
    /// resolved. Such a failure almost always means that the task exited
    /// after it was listed, so the task is dropped as a whole instead of
    /// being reported with a partial set of namespaces.
    pub fn task(&self, pid: u32, tid: u32) -> Option<Task> {
        if tid == 0 {
            return None;
        }
        let namespaces = self
            .namespaces(pid, tid)
            .ok()
            .filter(|namespaces| !namespaces.is_empty())?;
        // Linux marks the task leader by a leader ID of zero.
        let leader = if tid == pid { 0 } else { pid };
        Some(Task::new(tid, leader, namespaces))
    }

    /// Resolves the namespace links of task `tid` into a type to ID map.
    ///
    /// Links describing future children are skipped, they do not tell which
    /// namespaces the task itself is attached to.
    ///
    /// # Errors
    ///
    /// Returns an error if the `ns` directory or any link cannot be read, or
    /// if a link text does not name the namespace type of its link.
    pub fn namespaces(&self, pid: u32, tid: u32) -> Result<BTreeMap<String, u64>> {
        let ns_dir = self.ns_dir(pid, tid);
        let ns_dir = ns_dir.as_path();
        let io_err = |path: &Path, source| NamspillError::Io {
            path: path.to_path_buf(),
            source,
        };
        let mut namespaces = BTreeMap::new();
        for entry in std::fs::read_dir(ns_dir).map_err(|e| io_err(ns_dir, e))? {
            let entry = entry.map_err(|e| io_err(ns_dir, e))?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.ends_with(FOR_CHILDREN_SUFFIX) {
                continue;
            }
            let link = entry.path();
            let target = std::fs::read_link(&link).map_err(|e| io_err(&link, e))?;
            let handle = target.to_string_lossy();
            let (typ, nsid) = parse_namespace_handle(&handle)?;
            if typ != name {
                return Err(NamspillError::MalformedHandle {
                    handle: handle.into_owned(),
                });
            }
            let _ = namespaces.insert(typ.to_owned(), nsid);
        }
        Ok(namespaces)
    }
}

/// Parses a task directory entry name; only non-zero decimal `u32` values
/// are task IDs.
fn parse_tid(name: &str) -> Option<u32> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse::<u32>().ok().filter(|&tid| tid != 0)
}

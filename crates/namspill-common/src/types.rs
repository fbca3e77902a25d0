//! Domain types shared across the namspill workspace.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Snapshot of one Linux task (thread) of a process and the namespaces it
/// was attached to at the time of observation.
///
/// A `Task` is a plain value: it is never updated after construction and
/// does not track the live task it was taken from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    tid: u32,
    leader: u32,
    namespaces: BTreeMap<String, u64>,
}

impl Task {
    /// Creates a task snapshot.
    ///
    /// `leader` follows the Linux convention: zero if this task is the task
    /// leader of its process, otherwise the leader's task ID.
    #[must_use]
    pub fn new<I, S>(tid: u32, leader: u32, namespaces: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        Self {
            tid,
            leader,
            namespaces: namespaces
                .into_iter()
                .map(|(typ, nsid)| (typ.into(), nsid))
                .collect(),
        }
    }

    /// The zero task, standing for no live task.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            tid: 0,
            leader: 0,
            namespaces: BTreeMap::new(),
        }
    }

    /// Task ID of this task.
    #[must_use]
    pub const fn tid(&self) -> u32 {
        self.tid
    }

    /// Task ID of the task leader, or zero if this is the leader.
    #[must_use]
    pub const fn leader(&self) -> u32 {
        self.leader
    }

    /// Namespace types and IDs, ordered by type name.
    #[must_use]
    pub const fn namespaces(&self) -> &BTreeMap<String, u64> {
        &self.namespaces
    }

    /// Returns the namespace ID attached for `typ`, if any.
    #[must_use]
    pub fn namespace(&self, typ: &str) -> Option<u64> {
        self.namespaces.get(typ).copied()
    }

    /// Returns `true` if this task is the task leader of its process.
    #[must_use]
    pub const fn is_leader(&self) -> bool {
        self.leader == 0
    }

    /// Returns `true` for the zero task, which stands for no live task.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.tid == 0
    }
}

/// Single-line rendering, e.g. `Task TID: 42, mnt:[4026531841], net:[4026531840]`.
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leader() {
            write!(f, "Task Leader PID: {}", self.tid)?;
        } else {
            write!(f, "Task TID: {}", self.tid)?;
        }
        for (typ, nsid) in &self.namespaces {
            write!(f, ", {typ}:[{nsid}]")?;
        }
        Ok(())
    }
}

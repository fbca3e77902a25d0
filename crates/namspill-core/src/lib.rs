//! # namspill-core
//!
//! Discovers the tasks (threads) of a process from procfs and, for each
//! task, the IDs of the namespaces it is attached to.
//!
//! - **Handles**: parsing of `ns/*` link texts such as `net:[4026531840]`.
//! - **Procfs**: task listing and per-task namespace resolution against an
//!   injectable procfs root.
//! - **Discovery**: one point-in-time pass producing [`Task`] snapshots.
//!
//! Which application-level unit of work runs on which task is not tracked;
//! that mapping changes constantly and is up to the scheduler.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod discovery;
pub mod handle;
pub mod procfs;

pub use discovery::{discover, discover_with, task_ids, tasks};
pub use namspill_common::types::Task;
pub use procfs::{ProcFs, TaskIds};

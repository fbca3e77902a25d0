//! # namspill
//!
//! Detects namespace "spilling": tasks (threads) of the same process ending
//! up attached to different Linux namespaces, typically because a thread
//! switched namespaces and then got reused for unrelated work.
//!
//! Two entry points:
//! - [`tasks`]: discovers the current tasks of this process together with
//!   their namespace IDs.
//! - [`is_uniformly_namespaced`](uniformity::is_uniformly_namespaced):
//!   checks that all tasks share the task leader's namespaces.
//!
//! # Example
//!
//! ```rust,no_run
//! use namspill::uniformity::ensure_uniformly_namespaced;
//!
//! let tasks = namspill::tasks().unwrap_or_default();
//! if let Err(err) = ensure_uniformly_namespaced(&tasks) {
//!     eprintln!("{err}");
//! }
//! ```

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod format;
pub mod uniformity;

pub use namspill_common::config::DiscoveryConfig;
pub use namspill_common::error::{NamspillError, Result};
pub use namspill_common::types::Task;
pub use namspill_core::{TaskIds, discover_with, task_ids, tasks};
pub use uniformity::{ensure_uniformly_namespaced, is_uniformly_namespaced};

//! Discovery against the live procfs of the test process.
//!
//! Helper threads are parked on a barrier so that the task set stays put
//! while discovery runs.

#![cfg(target_os = "linux")]
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use namspill_core::{Task, task_ids, tasks};

const HELPERS: usize = 3;

fn with_parked_helpers<T>(f: impl FnOnce() -> T) -> T {
    let barrier = Arc::new(Barrier::new(HELPERS + 1));
    let handles: Vec<_> = (0..HELPERS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let _ = barrier.wait();
            })
        })
        .collect();
    let result = f();
    let _ = barrier.wait();
    for handle in handles {
        handle.join().unwrap();
    }
    result
}

#[test]
fn task_ids_lists_this_process() {
    let ids = with_parked_helpers(task_ids).expect("task ids");
    assert!(ids.tids.len() > HELPERS);
    assert_eq!(ids.leader, std::process::id());
    assert!(ids.tids.contains(&ids.leader));
    assert!(ids.tids.iter().all(|&tid| tid != 0));
    let unique: HashSet<_> = ids.tids.iter().collect();
    assert_eq!(unique.len(), ids.tids.len());
}

#[test]
fn tasks_discovers_helpers_with_namespaces() {
    let (ids, tasks) = with_parked_helpers(|| (task_ids().expect("task ids"), tasks()));
    let tasks = tasks.expect("tasks");
    assert!(tasks.len() > HELPERS);

    let tids: HashSet<_> = tasks.iter().map(Task::tid).collect();
    assert_eq!(tids.len(), tasks.len(), "duplicate TIDs in {tasks:?}");
    assert!(tasks.iter().all(|t| ids.tids.contains(&t.tid())));
    assert!(tasks.iter().all(|t| !t.namespaces().is_empty()));
    assert!(tasks.iter().all(|t| t.namespace("net").is_some()));

    let leaders: Vec<_> = tasks.iter().filter(|t| t.is_leader()).collect();
    assert_eq!(leaders.len(), 1);
    assert_eq!(leaders[0].tid(), std::process::id());
}

#[test]
fn tasks_render_as_single_lines() {
    let tasks = tasks().expect("tasks");
    for task in &tasks {
        let line = task.to_string();
        assert!(!line.contains('\n'));
        if task.is_leader() {
            assert!(line.starts_with("Task Leader PID: "), "got: {line}");
        } else {
            assert!(line.starts_with("Task TID: "), "got: {line}");
        }
        assert!(line.contains(", net:["), "got: {line}");
    }
}

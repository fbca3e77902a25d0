//! Detection of a real namespace switch by one of the process' threads.
//!
//! Lives in its own test binary: while the helper thread sits in its own
//! UTS namespace, any other test discovering this process would see the
//! spill too.
//!
//! Needs root (`CAP_SYS_ADMIN`); returns early otherwise.

#![cfg(target_os = "linux")]
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::fs::File;
use std::sync::mpsc;
use std::thread;

use namspill::{Task, is_uniformly_namespaced};
use nix::sched::{CloneFlags, setns, unshare};
use nix::unistd::{geteuid, gettid};

fn spilled_tid() -> Option<u32> {
    let tasks = namspill::tasks().expect("tasks");
    let leader = tasks.iter().find(|t| t.is_leader()).expect("leader task");
    tasks
        .iter()
        .find(|t| t.namespace("uts") != leader.namespace("uts"))
        .map(Task::tid)
}

#[test]
fn unshared_thread_spills_until_it_switches_back() {
    if !geteuid().is_root() {
        return;
    }

    let (switched_tx, switched_rx) = mpsc::channel();
    let (restore_tx, restore_rx) = mpsc::channel::<()>();
    let (restored_tx, restored_rx) = mpsc::channel();
    let (exit_tx, exit_rx) = mpsc::channel::<()>();

    let helper = thread::spawn(move || {
        let original = File::open("/proc/thread-self/ns/uts").expect("own UTS namespace");
        let switched = unshare(CloneFlags::CLONE_NEWUTS)
            .map(|()| u32::try_from(gettid().as_raw()).unwrap());
        let unshared = switched.is_ok();
        switched_tx.send(switched).unwrap();
        if unshared {
            let _ = restore_rx.recv();
            setns(&original, CloneFlags::CLONE_NEWUTS).expect("switch back");
            restored_tx.send(()).unwrap();
            let _ = exit_rx.recv();
        }
    });

    let Ok(helper_tid) = switched_rx.recv().unwrap() else {
        // Root without CAP_SYS_ADMIN, e.g. in an unprivileged container.
        helper.join().unwrap();
        return;
    };

    let tasks = namspill::tasks().expect("tasks");
    assert!(!is_uniformly_namespaced(&tasks).unwrap());
    assert_eq!(spilled_tid(), Some(helper_tid));

    restore_tx.send(()).unwrap();
    restored_rx.recv().unwrap();

    let tasks = namspill::tasks().expect("tasks");
    assert!(tasks.iter().any(|t| t.tid() == helper_tid));
    assert!(is_uniformly_namespaced(&tasks).unwrap());

    exit_tx.send(()).unwrap();
    helper.join().unwrap();
}

//! Two-Counter Transfer Scenario
//!
//! A transaction reads two counters and moves one unit between them.
//! Uncontended it commits both updates together; under a forced
//! conflict it retries and commits against the updated base value.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use vstm::prelude::*;

#[test]
fn uncontended_transfer_updates_both_counters_together() {
    let counter1 = TVar::new(0i64);
    let counter2 = TVar::new(1i64);

    execute_transaction(|tx| {
        let c1 = counter1.read(tx)?;
        let c2 = counter2.read(tx)?;
        counter1.write(tx, c1 + 1)?;
        counter2.write(tx, c2 - 1)
    })
    .unwrap();

    assert_eq!(counter1.read_unversioned(), 1);
    assert_eq!(counter2.read_unversioned(), 0);
}

#[test]
fn conflicted_transfer_commits_against_updated_base() {
    let counter1 = TVar::new(0i64);
    let counter2 = TVar::new(1i64);
    let injected = AtomicBool::new(false);
    let mut attempts = 0;

    execute_transaction(|tx| {
        attempts += 1;
        let c1 = counter1.read(tx)?;
        let c2 = counter2.read(tx)?;

        // Force a conflicting commit to counter1 between read and
        // commit, once.
        if !injected.swap(true, Ordering::SeqCst) {
            thread::scope(|s| {
                s.spawn(|| {
                    execute_transaction(|competitor| {
                        let v = counter1.read(competitor)?;
                        counter1.write(competitor, v + 100)
                    })
                    .unwrap();
                });
            });
        }

        counter1.write(tx, c1 + 1)?;
        counter2.write(tx, c2 - 1)
    })
    .unwrap();

    assert_eq!(attempts, 2);
    // The retry based its increment on the competitor's 100.
    assert_eq!(counter1.read_unversioned(), 101);
    assert_eq!(counter2.read_unversioned(), 0);
}

//! Isolation Tests
//!
//! A transaction whose read was invalidated by a concurrent commit must
//! not commit the stale value; it retries and sees the new state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use vstm::prelude::*;

#[test]
fn stale_first_attempt_is_rejected_and_retried() {
    let var = TVar::new(0i64);
    let injected = AtomicBool::new(false);
    let mut attempts = 0;

    execute_transaction(|tx| {
        attempts += 1;
        let seen = var.read(tx)?;

        // Between the read above and this attempt's commit, another
        // thread commits a competing write. Only once.
        if !injected.swap(true, Ordering::SeqCst) {
            thread::scope(|s| {
                s.spawn(|| {
                    execute_transaction(|competitor| {
                        let v = var.read(competitor)?;
                        var.write(competitor, v + 5)
                    })
                    .unwrap();
                });
            });
        }

        var.write(tx, seen + 1)
    })
    .unwrap();

    // First attempt read 0 and was rejected; the retry read 5.
    assert_eq!(attempts, 2);
    assert_eq!(var.read_unversioned(), 6);
    assert_eq!(var.committed_version(), 2);
}

#[test]
fn read_only_transaction_retries_on_stale_snapshot() {
    let a = TVar::new(1i64);
    let b = TVar::new(2i64);
    let injected = AtomicBool::new(false);
    let mut attempts = 0;
    let mut observed = (0, 0);

    execute_transaction(|tx| {
        attempts += 1;
        let x = a.read(tx)?;

        if !injected.swap(true, Ordering::SeqCst) {
            thread::scope(|s| {
                s.spawn(|| {
                    execute_transaction(|competitor| {
                        a.write(competitor, 10)?;
                        b.write(competitor, 20)
                    })
                    .unwrap();
                });
            });
        }

        let y = b.read(tx)?;
        observed = (x, y);
        Ok(())
    })
    .unwrap();

    // The first attempt mixed pre- and post-commit state (1, 20) and
    // must not have been accepted.
    assert_eq!(attempts, 2);
    assert_eq!(observed, (10, 20));
}

#[test]
fn staged_writes_stay_invisible_to_other_threads() {
    let var = TVar::new(0i64);
    let staged = AtomicBool::new(false);
    let checked = AtomicBool::new(false);

    thread::scope(|s| {
        let observer = s.spawn(|| {
            while !staged.load(Ordering::SeqCst) {
                thread::yield_now();
            }
            // The writer has staged 42 but not committed.
            assert_eq!(var.read_unversioned(), 0);
            checked.store(true, Ordering::SeqCst);
        });

        execute_transaction(|tx| {
            var.write(tx, 42)?;
            staged.store(true, Ordering::SeqCst);
            while !checked.load(Ordering::SeqCst) {
                thread::yield_now();
            }
            Ok(())
        })
        .unwrap();

        observer.join().unwrap();
    });

    assert_eq!(var.read_unversioned(), 42);
}

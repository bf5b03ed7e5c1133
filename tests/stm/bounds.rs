//! Bounded Set Tests
//!
//! Exceeding the configured read- or write-set bound is terminal,
//! never retried, and publishes nothing.

use vstm::prelude::*;

#[test]
fn read_set_overflow_is_terminal_with_no_partial_commit() {
    let vars: Vec<TVar<i64>> = (0..5).map(TVar::new).collect();
    let options = TransactionOptions::new().with_max_read_var(3);
    let mut attempts = 0;

    let result = execute_transaction_with(
        |tx| {
            attempts += 1;
            for var in &vars {
                let value = var.read(tx)?;
                var.write(tx, value + 100)?;
            }
            Ok(())
        },
        &options,
    );

    assert_eq!(
        result,
        Err(TransactionError::TooManyValues {
            set: SetKind::Reads,
            limit: 3,
        })
    );
    assert_eq!(attempts, 1);
    for (i, var) in vars.iter().enumerate() {
        assert_eq!(var.read_unversioned(), i as i64);
        assert_eq!(var.committed_version(), 0);
    }
}

#[test]
fn write_set_overflow_is_terminal_with_no_partial_commit() {
    let vars: Vec<TVar<i64>> = (0..4).map(TVar::new).collect();
    let options = TransactionOptions::new().with_max_write_var(2);

    let result = execute_transaction_with(
        |tx| {
            for var in &vars {
                var.write(tx, -1)?;
            }
            Ok(())
        },
        &options,
    );

    assert_eq!(
        result,
        Err(TransactionError::TooManyValues {
            set: SetKind::Writes,
            limit: 2,
        })
    );
    for (i, var) in vars.iter().enumerate() {
        assert_eq!(var.read_unversioned(), i as i64);
    }
}

#[test]
fn bounds_count_distinct_variables_not_operations() {
    let var = TVar::new(0i64);
    let options = TransactionOptions::new()
        .with_max_read_var(1)
        .with_max_write_var(1);

    execute_transaction_with(
        |tx| {
            for _ in 0..10 {
                let value = var.read(tx)?;
                var.write(tx, value + 1)?;
            }
            Ok(())
        },
        &options,
    )
    .unwrap();

    assert_eq!(var.read_unversioned(), 10);
}

#[test]
fn abort_discards_staged_writes() {
    let var = TVar::new(7i64);

    let result = execute_transaction(|tx| {
        var.write(tx, 1000)?;
        tx.abort()
    });

    assert_eq!(result, Err(TransactionError::Abort));
    assert_eq!(var.read_unversioned(), 7);
    assert_eq!(var.committed_version(), 0);
}

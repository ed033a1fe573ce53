//! Helpers for services tested against `MockDatabase`.
//!
//! With sea-orm's `mock` feature `DatabaseConnection` is not `Clone`, so
//! tests share one `Arc` and take the connection back to read its log.

use sea_orm::{DatabaseConnection, MockDatabase, MockExecResult, Transaction};
use std::sync::Arc;

pub fn shared(db: MockDatabase) -> Arc<DatabaseConnection> {
    Arc::new(db.into_connection())
}

pub fn exec(rows_affected: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected,
    }
}

/// Transaction log of `db`; every service holding a clone must be dropped.
pub fn transaction_log(db: Arc<DatabaseConnection>) -> Vec<Transaction> {
    Arc::try_unwrap(db)
        .ok()
        .expect("mock connection still shared")
        .into_transaction_log()
}

/// `transaction_log` rendered with `Debug`, for substring checks.
pub fn log_text(db: Arc<DatabaseConnection>) -> String {
    format!("{:?}", transaction_log(db))
}

//! Typed error enum for the storage layer.

use carsales_core::TableError;
use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// `CREATE TABLE` hit an existing relation (SQLSTATE 42P07).
    #[error("table already exists: {0}")]
    DuplicateTable(String),

    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Rows could not be assembled into a table.
    #[error("table error: {0}")]
    Table(#[from] TableError),
}

impl StorageError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)))
    }

    /// Whether this error reports a table that is already there.
    pub fn is_duplicate_table(&self) -> bool {
        matches!(self, Self::DuplicateTable(_))
    }
}

/// Custom `From<sqlx::Error>`, classified by SQLSTATE rather than message text.
///
/// - SQLSTATE 42P07 → `DuplicateTable`
/// - Everything else → `Database`
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some("42P07") {
                return Self::DuplicateTable(db_err.message().to_owned());
            }
        }
        Self::Database(err)
    }
}

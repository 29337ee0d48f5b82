//! Typed error enum for the service layer.
//!
//! Keeps provisioning, ingest and reporting failures distinct so callers can tell a
//! bad input file from a database fault.

use std::path::PathBuf;

use carsales_core::TableError;
use carsales_storage::StorageError;
use thiserror::Error;

/// Service-layer error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Creating a table failed for a reason other than it already existing.
    #[error("schema: creating {table} failed: {source}")]
    Schema {
        table: &'static str,
        #[source]
        source: StorageError,
    },

    /// The input file parsed to zero data rows.
    #[error("the '{}' file is empty", .path.display())]
    EmptyInput { path: PathBuf },

    /// The input file does not exist.
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// The input file exists but could not be read as CSV.
    #[error("csv: {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Caller provided invalid arguments.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Database read, write or query failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Query result did not match the declared row shape.
    #[error("table: {0}")]
    Table(#[from] TableError),

    /// Chart could not be drawn or written.
    #[error("render: {0}")]
    Render(String),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) | Self::Schema { source: e, .. } => e.is_transient(),
            _ => false,
        }
    }
}

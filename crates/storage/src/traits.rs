//! Storage backend trait abstraction
//!
//! One trait per concern so callers only depend on what they use.

use async_trait::async_trait;
use carsales_core::{DataTable, TableSchema};

use crate::error::StorageError;

/// Table provisioning.
#[async_trait]
pub trait SchemaStore: Send + Sync {
    /// Whether a relation named `table` exists.
    async fn table_exists(&self, table: &str) -> Result<bool, StorageError>;

    /// Create `schema` if it is absent.
    async fn create_table(&self, schema: &TableSchema) -> Result<(), StorageError>;
}

/// Row appends.
#[async_trait]
pub trait BulkStore: Send + Sync {
    /// Append every row of `data` to `table`, using `data`'s columns as the target
    /// column list. Returns the number of rows written.
    async fn append_rows(&self, table: &str, data: &DataTable) -> Result<u64, StorageError>;
}

/// Ad-hoc SQL.
#[async_trait]
pub trait QueryStore: Send + Sync {
    /// Execute `sql` verbatim and collect the result set.
    async fn run_query(&self, sql: &str) -> Result<DataTable, StorageError>;
}

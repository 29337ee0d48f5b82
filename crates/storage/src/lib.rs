//! Storage layer for carsales
//!
//! PostgreSQL access through sqlx, behind small async traits so the service layer
//! can be exercised against in-memory doubles.

mod error;
mod pg_storage;
pub mod traits;

pub use error::StorageError;
pub use pg_storage::{PgStorage, create_table_sql, quote_ident};
pub use traits::{BulkStore, QueryStore, SchemaStore};

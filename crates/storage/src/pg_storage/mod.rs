//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by concern.

mod bulk;
mod query;
mod schema;

use std::time::Duration;

use carsales_core::DbConfig;
use carsales_core::constants::{PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::error::StorageError;

pub use schema::create_table_sql;

/// Connection handle. The pool connects lazily on first use.
#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Build a handle from the five connection settings.
    pub fn connect(config: &DbConfig) -> Result<Self, StorageError> {
        let storage = Self::from_url(&config.connection_url())?;
        tracing::info!(host = %config.host, port = %config.port, db = %config.name, "PgStorage initialized");
        Ok(storage)
    }

    /// Build a handle from a complete connection URL.
    pub fn from_url(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Double-quote an identifier so mixed-case names like `Engine_Type` survive.
#[must_use]
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ident() {
        assert_eq!(quote_ident("Engine_Type"), "\"Engine_Type\"");
        assert_eq!(quote_ident("odd\"name"), "\"odd\"\"name\"");
    }
}

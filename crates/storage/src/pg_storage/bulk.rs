//! BulkStore implementation for PgStorage.

use async_trait::async_trait;
use carsales_core::constants::PG_MAX_BIND_PARAMS;
use carsales_core::{DataTable, Value};
use sqlx::query_builder::Separated;
use sqlx::{Postgres, QueryBuilder};

use super::{PgStorage, quote_ident};
use crate::error::StorageError;
use crate::traits::BulkStore;

/// Rows per `INSERT` so that a statement never exceeds the bind-parameter limit.
pub(crate) fn rows_per_statement(width: usize) -> usize {
    (PG_MAX_BIND_PARAMS / width.max(1)).max(1)
}

fn insert_prefix(table: &str, columns: &[String]) -> String {
    let cols: Vec<String> = columns.iter().map(|c| quote_ident(c)).collect();
    format!("INSERT INTO {} ({}) ", quote_ident(table), cols.join(", "))
}

fn push_value(row: &mut Separated<'_, '_, Postgres, &'static str>, value: &Value) {
    match value {
        // Untyped NULL lets PostgreSQL coerce to the column type.
        Value::Null => {
            row.push("NULL");
        },
        Value::Integer(v) => {
            row.push_bind(*v);
        },
        Value::Float(v) => {
            row.push_bind(*v);
        },
        Value::Text(v) => {
            row.push_bind(v.clone());
        },
        Value::Boolean(v) => {
            row.push_bind(*v);
        },
    }
}

#[async_trait]
impl BulkStore for PgStorage {
    async fn append_rows(&self, table: &str, data: &DataTable) -> Result<u64, StorageError> {
        if data.is_empty() {
            return Ok(0);
        }

        let prefix = insert_prefix(table, data.columns());
        let mut tx = self.pool.begin().await?;
        let mut inserted: u64 = 0;

        for chunk in data.rows().chunks(rows_per_statement(data.width())) {
            let mut builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(&prefix);
            builder.push_values(chunk, |mut row, values| {
                for value in values {
                    push_value(&mut row, value);
                }
            });
            let result = builder.build().execute(&mut *tx).await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        tracing::debug!(table, rows = inserted, "rows appended");
        Ok(inserted)
    }
}

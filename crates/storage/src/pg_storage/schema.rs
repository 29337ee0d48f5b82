//! SchemaStore implementation for PgStorage.

use async_trait::async_trait;
use carsales_core::{ColumnType, TableSchema};

use super::{PgStorage, quote_ident};
use crate::error::StorageError;
use crate::traits::SchemaStore;

const fn pg_type(column_type: ColumnType) -> &'static str {
    match column_type {
        ColumnType::Integer => "INTEGER",
        ColumnType::Float => "FLOAT",
        ColumnType::Text => "VARCHAR",
    }
}

/// `CREATE TABLE IF NOT EXISTS` statement for `schema`.
///
/// Primary-key columns become `SERIAL PRIMARY KEY` so appends may omit them.
#[must_use]
pub fn create_table_sql(schema: &TableSchema) -> String {
    let columns: Vec<String> = schema
        .columns
        .iter()
        .map(|c| {
            if c.primary_key {
                format!("{} SERIAL PRIMARY KEY", quote_ident(c.name))
            } else {
                format!("{} {}", quote_ident(c.name), pg_type(c.column_type))
            }
        })
        .collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
        quote_ident(schema.name),
        columns.join(",\n    ")
    )
}

#[async_trait]
impl SchemaStore for PgStorage {
    async fn table_exists(&self, table: &str) -> Result<bool, StorageError> {
        let exists: bool = sqlx::query_scalar("SELECT to_regclass($1) IS NOT NULL")
            .bind(quote_ident(table))
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn create_table(&self, schema: &TableSchema) -> Result<(), StorageError> {
        let sql = create_table_sql(schema);
        tracing::debug!(table = schema.name, "creating table");
        sqlx::query(&sql).execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use carsales_core::{CAR_DATA, CONSUMER_DATA};

    use super::*;

    #[test]
    fn test_create_car_data_sql() {
        let sql = create_table_sql(&CAR_DATA);
        assert_eq!(
            sql,
            "CREATE TABLE IF NOT EXISTS \"car_data\" (\n    \"Id\" SERIAL PRIMARY KEY,\n    \
             \"Make\" VARCHAR,\n    \"Model\" VARCHAR,\n    \"Year\" INTEGER,\n    \
             \"Price\" INTEGER,\n    \"Engine_Type\" VARCHAR\n)"
        );
    }

    #[test]
    fn test_create_consumer_data_sql_uses_float() {
        let sql = create_table_sql(&CONSUMER_DATA);
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS \"consumer_data\""));
        assert!(sql.contains("\"Review_Score\" FLOAT"));
        assert!(sql.contains("\"Sales_Volume\" INTEGER"));
    }
}

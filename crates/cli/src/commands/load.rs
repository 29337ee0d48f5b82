use std::path::Path;

use anyhow::{Result, anyhow};
use carsales_core::TableSchema;
use carsales_service::load_csv;
use carsales_storage::PgStorage;

/// Explicit columns win; otherwise known tables fall back to their schema.
pub(crate) fn resolve_columns(table: &str, columns: Vec<String>) -> Result<Vec<String>> {
    if !columns.is_empty() {
        return Ok(columns);
    }
    TableSchema::lookup(table)
        .map(|schema| schema.data_columns().map(str::to_owned).collect())
        .ok_or_else(|| anyhow!("--columns is required for unknown table {table}"))
}

pub(crate) async fn run(
    storage: &PgStorage,
    file: &Path,
    table: &str,
    columns: Vec<String>,
) -> Result<()> {
    let columns = resolve_columns(table, columns)?;
    let inserted = load_csv(file, storage, table, &columns).await?;
    println!("{inserted} rows appended to {table}");
    Ok(())
}

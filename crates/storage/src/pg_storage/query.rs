//! QueryStore implementation for PgStorage.
//!
//! Statements go through the simple query protocol, so every cell arrives in text
//! format. Known types are decoded into typed [`Value`]s; anything else keeps its
//! PostgreSQL text rendering.

use async_trait::async_trait;
use carsales_core::{DataTable, Value};
use sqlx::postgres::PgRow;
use sqlx::{Column, Executor, Row, TypeInfo};

use super::PgStorage;
use crate::error::StorageError;
use crate::traits::QueryStore;

/// How a PostgreSQL column type is decoded into a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueKind {
    Int2,
    Int4,
    Int8,
    Float4,
    Float8,
    /// Arbitrary precision, read as `f64`.
    Numeric,
    Text,
    Bool,
    /// Dates, timestamps, json, uuid, arrays ...: the server's text output.
    Other,
}

pub(crate) fn value_kind(type_name: &str) -> ValueKind {
    match type_name {
        "INT2" => ValueKind::Int2,
        "INT4" => ValueKind::Int4,
        "INT8" => ValueKind::Int8,
        "FLOAT4" => ValueKind::Float4,
        "FLOAT8" => ValueKind::Float8,
        "NUMERIC" => ValueKind::Numeric,
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => ValueKind::Text,
        "BOOL" => ValueKind::Bool,
        _ => ValueKind::Other,
    }
}

/// Parse a NUMERIC's text form; keep the text if it does not fit an `f64`.
pub(crate) fn numeric_value(text: String) -> Value {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() || text.eq_ignore_ascii_case("nan") => Value::Float(v),
        _ => Value::Text(text),
    }
}

fn decode_cell(row: &PgRow, idx: usize, kind: ValueKind) -> Result<Value, sqlx::Error> {
    let value: Value = match kind {
        ValueKind::Int2 => row.try_get::<Option<i16>, _>(idx)?.map(i64::from).into(),
        ValueKind::Int4 => row.try_get::<Option<i32>, _>(idx)?.map(i64::from).into(),
        ValueKind::Int8 => row.try_get::<Option<i64>, _>(idx)?.into(),
        ValueKind::Float4 => row.try_get::<Option<f32>, _>(idx)?.map(f64::from).into(),
        ValueKind::Float8 => row.try_get::<Option<f64>, _>(idx)?.into(),
        ValueKind::Numeric => {
            row.try_get_unchecked::<Option<String>, _>(idx)?.map_or(Value::Null, numeric_value)
        },
        ValueKind::Text => row.try_get::<Option<String>, _>(idx)?.into(),
        ValueKind::Bool => row.try_get::<Option<bool>, _>(idx)?.into(),
        ValueKind::Other => row.try_get_unchecked::<Option<String>, _>(idx)?.into(),
    };
    Ok(value)
}

fn rows_to_table(rows: &[PgRow]) -> Result<DataTable, StorageError> {
    let Some(first) = rows.first() else {
        return Ok(DataTable::default());
    };

    let columns: Vec<String> = first.columns().iter().map(|c| c.name().to_owned()).collect();
    let kinds: Vec<ValueKind> =
        first.columns().iter().map(|c| value_kind(c.type_info().name())).collect();

    let mut table = DataTable::new(columns);
    for row in rows {
        let values = kinds
            .iter()
            .enumerate()
            .map(|(idx, kind)| decode_cell(row, idx, *kind))
            .collect::<Result<Vec<_>, _>>()?;
        table.push_row(values)?;
    }
    Ok(table)
}

#[async_trait]
impl QueryStore for PgStorage {
    async fn run_query(&self, sql: &str) -> Result<DataTable, StorageError> {
        let rows = sqlx::raw_sql(sql).fetch_all(&self.pool).await?;
        if rows.is_empty() {
            // No row to read names from; take them from the statement description.
            let described = (&self.pool).describe(sql).await?;
            let columns: Vec<String> =
                described.columns().iter().map(|c| c.name().to_owned()).collect();
            tracing::debug!(columns = columns.len(), "query returned no rows");
            return Ok(DataTable::new(columns));
        }
        let table = rows_to_table(&rows)?;
        tracing::debug!(rows = table.len(), columns = table.width(), "query complete");
        Ok(table)
    }
}

//! CSV ingest: parse a delimited file against a caller-supplied header and append it.

use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::Path;

use carsales_core::{DataTable, Value};
use carsales_storage::BulkStore;

use crate::error::ServiceError;

/// Inferred type of one CSV column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Integer,
    Float,
    Text,
}

/// Numbers may carry surrounding whitespace; text is kept exactly as written.
fn infer_kind(cells: &[&str]) -> CellKind {
    let present = || cells.iter().filter(|c| !c.is_empty()).map(|c| c.trim());
    if present().all(|c| c.parse::<i64>().is_ok()) {
        CellKind::Integer
    } else if present().all(|c| c.parse::<f64>().is_ok()) {
        CellKind::Float
    } else {
        CellKind::Text
    }
}

fn to_value(cell: &str, kind: CellKind) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    match kind {
        CellKind::Integer => cell.trim().parse::<i64>().map_or_else(|_| cell.into(), Value::Integer),
        CellKind::Float => cell.trim().parse::<f64>().map_or_else(|_| cell.into(), Value::Float),
        CellKind::Text => cell.into(),
    }
}

fn validate_columns(columns: &[String]) -> Result<(), ServiceError> {
    if columns.is_empty() {
        return Err(ServiceError::InvalidInput("column list is empty".to_owned()));
    }
    let mut seen = HashSet::new();
    for column in columns {
        if !seen.insert(column.as_str()) {
            return Err(ServiceError::InvalidInput(format!("duplicate column: {column}")));
        }
    }
    Ok(())
}

/// Parse `path` as comma-separated data using `columns` as the header.
///
/// The file's own first line is discarded. Every record must have exactly
/// `columns.len()` fields.
pub fn read_csv(path: &Path, columns: &[String]) -> Result<DataTable, ServiceError> {
    validate_columns(columns)?;

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ServiceError::FileNotFound { path: path.to_path_buf() },
        _ => ServiceError::Csv { path: path.to_path_buf(), source: e.into() },
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|source| ServiceError::Csv { path: path.to_path_buf(), source })?;
        if record.len() != columns.len() {
            let line = record.position().map_or(0, csv::Position::line);
            return Err(ServiceError::InvalidInput(format!(
                "{} line {line}: {} fields, expected {}",
                path.display(),
                record.len(),
                columns.len()
            )));
        }
        records.push(record);
    }

    let kinds: Vec<CellKind> = (0..columns.len())
        .map(|idx| {
            let cells: Vec<&str> = records.iter().map(|r| &r[idx]).collect();
            infer_kind(&cells)
        })
        .collect();

    let rows = records
        .iter()
        .map(|record| record.iter().zip(&kinds).map(|(cell, kind)| to_value(cell, *kind)).collect())
        .collect();

    Ok(DataTable::with_rows(columns.iter().cloned(), rows)?)
}

/// Load `path` into `table` as a single append of all rows.
///
/// Fails with [`ServiceError::EmptyInput`] before any write when the file has no
/// data rows. Not idempotent: loading the same file twice appends its rows twice.
pub async fn load_csv<S>(
    path: &Path,
    store: &S,
    table: &str,
    columns: &[String],
) -> Result<u64, ServiceError>
where
    S: BulkStore + ?Sized,
{
    let data = read_csv(path, columns)?;
    if data.is_empty() {
        return Err(ServiceError::EmptyInput { path: path.to_path_buf() });
    }

    let inserted = store.append_rows(table, &data).await?;
    tracing::info!(rows = inserted, "Data '{}' loaded successfully into the base {table}", path.display());
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_kind() {
        assert_eq!(infer_kind(&["1", "", "3"]), CellKind::Integer);
        assert_eq!(infer_kind(&["1", "2.5"]), CellKind::Float);
        assert_eq!(infer_kind(&["1", "two"]), CellKind::Text);
        assert_eq!(infer_kind(&[]), CellKind::Integer);
    }

    #[test]
    fn test_infer_kind_ignores_padding_around_numbers() {
        assert_eq!(infer_kind(&[" 1", "2 "]), CellKind::Integer);
        assert_eq!(infer_kind(&["1", " "]), CellKind::Text);
    }

    #[test]
    fn test_to_value() {
        assert_eq!(to_value("42", CellKind::Integer), Value::Integer(42));
        assert_eq!(to_value(" 42", CellKind::Integer), Value::Integer(42));
        assert_eq!(to_value("4", CellKind::Float), Value::Float(4.0));
        assert_eq!(to_value("", CellKind::Text), Value::Null);
        assert_eq!(to_value(" Toyota", CellKind::Text), Value::from(" Toyota"));
    }

    #[test]
    fn test_validate_columns() {
        assert!(validate_columns(&[]).is_err());
        assert!(validate_columns(&["a".to_owned(), "a".to_owned()]).is_err());
        assert!(validate_columns(&["a".to_owned(), "b".to_owned()]).is_ok());
    }
}

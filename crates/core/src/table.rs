//! Ordered-column, ordered-row tabular container.
//!
//! `DataTable` is what flows between the CSV loader, the database and the report.
//! Consumers that need typed rows implement [`TypedRow`] and decode by column name.

use serde::Serialize;

use crate::error::TableError;

/// A single cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
}

impl Value {
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Boolean(_) => "boolean",
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Column names plus rows of equal width.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl DataTable {
    #[must_use]
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self { columns: columns.into_iter().map(Into::into).collect(), rows: Vec::new() }
    }

    /// Build a table, rejecting rows whose width differs from the column count.
    pub fn with_rows<S: Into<String>>(
        columns: impl IntoIterator<Item = S>,
        rows: Vec<Vec<Value>>,
    ) -> Result<Self, TableError> {
        let mut table = Self::new(columns);
        table.rows.reserve(rows.len());
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    pub fn push_row(&mut self, row: Vec<Value>) -> Result<(), TableError> {
        if row.len() != self.columns.len() {
            return Err(TableError::RowWidth {
                row: self.rows.len(),
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Decode every row into `T`, matching `T::COLUMNS` by name.
    pub fn decode<T: TypedRow>(&self) -> Result<Vec<T>, TableError> {
        let indices = T::COLUMNS
            .iter()
            .map(|name| {
                self.column_index(name).ok_or_else(|| TableError::MissingColumn((*name).to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.rows
            .iter()
            .enumerate()
            .map(|(row_idx, row)| {
                let values: Vec<&Value> = indices.iter().map(|&i| &row[i]).collect();
                T::from_values(row_idx, &values)
            })
            .collect()
    }
}

/// A row type with a declared column list.
pub trait TypedRow: Sized {
    /// Column names, in the order `from_values` receives them.
    const COLUMNS: &'static [&'static str];

    /// Build a row from values ordered as [`Self::COLUMNS`].
    fn from_values(row: usize, values: &[&Value]) -> Result<Self, TableError>;
}

/// Helper for [`TypedRow`] implementations: an error naming the offending cell.
#[must_use]
pub fn type_mismatch(column: &str, row: usize, expected: &'static str, found: &Value) -> TableError {
    TableError::TypeMismatch {
        column: column.to_owned(),
        row,
        expected,
        found: found.type_name(),
    }
}

use thiserror::Error;

/// Configuration could not be assembled from the environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variables for database connection: {}", .0.join(", "))]
    MissingVars(Vec<&'static str>),
}

/// A [`crate::DataTable`] was built or decoded inconsistently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("row {row} has {found} values, expected {expected}")]
    RowWidth { row: usize, expected: usize, found: usize },

    #[error("missing column: {0}")]
    MissingColumn(String),

    #[error("column {column} at row {row}: expected {expected}, found {found}")]
    TypeMismatch { column: String, row: usize, expected: &'static str, found: &'static str },
}

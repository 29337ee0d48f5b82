//! Core types for carsales
//!
//! Configuration, the fixed table schemas and the tabular container shared by the
//! storage, service and CLI crates.

pub mod config;
pub mod constants;
pub mod env_config;
mod error;
pub mod schema;
mod table;

pub use config::{DbConfig, LogFormat, LoggingConfig};
pub use env_config::{EnvSource, ProcessEnv};
pub use error::*;
pub use schema::{CAR_DATA, CONSUMER_DATA, ColumnDef, ColumnType, PROVISION_ORDER, TableSchema};
pub use table::{DataTable, TypedRow, Value, type_mismatch};

//! Test doubles and module declarations for service tests.

mod ingest_tests;

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use carsales_core::{DataTable, TableSchema};
use carsales_storage::{BulkStore, QueryStore, SchemaStore, StorageError};

use crate::report::{ChartRenderer, GroupedBarChart};
use crate::error::ServiceError;

/// How `create_table` should fail for a given table.
#[derive(Debug, Clone, Copy)]
pub enum CreateFailure {
    /// Unrelated database fault.
    Database,
    /// Someone else created the table first.
    AlreadyExists,
}

/// In-memory stand-in for `PgStorage` that records every call.
#[derive(Default)]
pub struct MockStore {
    existing: Mutex<HashSet<String>>,
    create_failure: Option<(&'static str, CreateFailure)>,
    fail_exists_check: bool,
    pub created: Mutex<Vec<String>>,
    pub appends: Mutex<Vec<(String, DataTable)>>,
    pub queries: Mutex<Vec<String>>,
    query_result: Option<DataTable>,
}

impl MockStore {
    pub fn with_existing(tables: &[&str]) -> Self {
        let store = Self::default();
        store.existing.lock().unwrap().extend(tables.iter().map(|t| (*t).to_owned()));
        store
    }

    pub fn failing_create(table: &'static str, failure: CreateFailure) -> Self {
        Self { create_failure: Some((table, failure)), ..Self::default() }
    }

    pub fn failing_exists_check() -> Self {
        Self { fail_exists_check: true, ..Self::default() }
    }

    pub fn with_query_result(table: DataTable) -> Self {
        Self { query_result: Some(table), ..Self::default() }
    }

    pub fn created(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }

    pub fn appends(&self) -> Vec<(String, DataTable)> {
        self.appends.lock().unwrap().clone()
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SchemaStore for MockStore {
    async fn table_exists(&self, table: &str) -> Result<bool, StorageError> {
        if self.fail_exists_check {
            return Err(StorageError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self.existing.lock().unwrap().contains(table))
    }

    async fn create_table(&self, schema: &TableSchema) -> Result<(), StorageError> {
        match self.create_failure {
            Some((table, CreateFailure::Database)) if table == schema.name => {
                Err(StorageError::Database(sqlx::Error::PoolTimedOut))
            },
            Some((table, CreateFailure::AlreadyExists)) if table == schema.name => {
                Err(StorageError::DuplicateTable(format!("relation \"{table}\" already exists")))
            },
            _ => {
                self.existing.lock().unwrap().insert(schema.name.to_owned());
                self.created.lock().unwrap().push(schema.name.to_owned());
                Ok(())
            },
        }
    }
}

#[async_trait]
impl BulkStore for MockStore {
    async fn append_rows(&self, table: &str, data: &DataTable) -> Result<u64, StorageError> {
        self.appends.lock().unwrap().push((table.to_owned(), data.clone()));
        Ok(data.len() as u64)
    }
}

#[async_trait]
impl QueryStore for MockStore {
    async fn run_query(&self, sql: &str) -> Result<DataTable, StorageError> {
        self.queries.lock().unwrap().push(sql.to_owned());
        self.query_result
            .clone()
            .ok_or(StorageError::Database(sqlx::Error::Protocol("relation does not exist".into())))
    }
}

/// Renderer that only counts calls.
#[derive(Default)]
pub struct RecordingRenderer {
    pub plotted: Vec<GroupedBarChart>,
    pub shows: usize,
}

impl ChartRenderer for RecordingRenderer {
    fn bar_plot(&mut self, chart: &GroupedBarChart) -> Result<(), ServiceError> {
        self.plotted.push(chart.clone());
        Ok(())
    }

    fn show(&mut self) -> Result<(), ServiceError> {
        self.shows += 1;
        Ok(())
    }
}

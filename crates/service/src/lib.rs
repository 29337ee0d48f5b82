//! Service layer for carsales
//!
//! Provisioning, CSV ingest and the sales report, written against the storage
//! traits so every operation works with any backend.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod error;
mod ingest;
mod provision;
mod query;
mod report;
#[cfg(test)]
mod tests;

pub use error::ServiceError;
pub use ingest::{load_csv, read_csv};
pub use provision::{ProvisionReport, provision_schema};
pub use query::run_query;
pub use report::{
    Bar, ChartRenderer, GroupedBarChart, LEGEND_TITLE, REPORT_TITLE, SALES_BY_YEAR_QUERY,
    SalesRow, SvgChartRenderer, render_sales_report,
};

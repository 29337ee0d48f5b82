use carsales_core::DataTable;
use carsales_storage::QueryStore;

use crate::error::ServiceError;

/// Execute `sql` as given and return its result set. The SQL is trusted.
pub async fn run_query<Q>(store: &Q, sql: &str) -> Result<DataTable, ServiceError>
where
    Q: QueryStore + ?Sized,
{
    let table = store.run_query(sql).await?;
    tracing::debug!(rows = table.len(), columns = ?table.columns(), "query returned");
    Ok(table)
}

use carsales_core::PROVISION_ORDER;
use carsales_storage::SchemaStore;

use crate::error::ServiceError;

/// Outcome of [`provision_schema`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    pub created: Vec<&'static str>,
    pub existing: Vec<&'static str>,
}

impl ProvisionReport {
    #[must_use]
    pub fn all_created(&self) -> bool {
        self.existing.is_empty() && !self.created.is_empty()
    }
}

/// Create `consumer_data` then `car_data`, skipping whichever already exists.
///
/// Existing tables are logged and skipped. Any other failure aborts provisioning and
/// is returned as [`ServiceError::Schema`].
pub async fn provision_schema<S>(store: &S) -> Result<ProvisionReport, ServiceError>
where
    S: SchemaStore + ?Sized,
{
    let mut report = ProvisionReport::default();

    for schema in PROVISION_ORDER {
        let table = schema.name;
        let schema_err = |source| ServiceError::Schema { table, source };

        if store.table_exists(table).await.map_err(schema_err)? {
            tracing::info!(table, "Table already exists.");
            report.existing.push(table);
            continue;
        }

        match store.create_table(&schema).await {
            Ok(()) => report.created.push(table),
            // Another process created it between the check and the create.
            Err(e) if e.is_duplicate_table() => {
                tracing::info!(table, "Table already exists.");
                report.existing.push(table);
            },
            Err(e) => return Err(schema_err(e)),
        }
    }

    if report.all_created() {
        tracing::info!("Tables created");
    }
    Ok(report)
}

use anyhow::Result;
use carsales_service::provision_schema;
use carsales_storage::PgStorage;

pub(crate) async fn run(storage: &PgStorage) -> Result<()> {
    let report = provision_schema(storage).await?;
    for table in &report.created {
        println!("created: {table}");
    }
    for table in &report.existing {
        println!("already exists: {table}");
    }
    Ok(())
}

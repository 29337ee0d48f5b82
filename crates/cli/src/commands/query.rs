use anyhow::Result;
use carsales_service::run_query;
use carsales_storage::PgStorage;

pub(crate) async fn run(storage: &PgStorage, sql: &str) -> Result<()> {
    let table = run_query(storage, sql).await?;
    println!("{}", serde_json::to_string_pretty(&table)?);
    Ok(())
}

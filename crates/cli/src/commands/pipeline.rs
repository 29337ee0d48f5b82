//! Full run: provision, load both files, render.

use std::path::{Path, PathBuf};

use anyhow::Result;
use carsales_core::{CAR_DATA, CONSUMER_DATA, TableSchema};
use carsales_service::load_csv;
use carsales_storage::PgStorage;

async fn load_into(storage: &PgStorage, file: &Path, schema: &TableSchema) -> Result<()> {
    let columns: Vec<String> = schema.data_columns().map(str::to_owned).collect();
    let inserted = load_csv(file, storage, schema.name, &columns).await?;
    println!("{inserted} rows appended to {}", schema.name);
    Ok(())
}

pub(crate) async fn run(
    storage: &PgStorage,
    car_csv: &Path,
    consumer_csv: &Path,
    output: PathBuf,
) -> Result<()> {
    super::init::run(storage).await?;
    load_into(storage, car_csv, &CAR_DATA).await?;
    load_into(storage, consumer_csv, &CONSUMER_DATA).await?;
    super::report::run(storage, output).await
}

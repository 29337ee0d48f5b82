use std::path::PathBuf;

use anyhow::Result;
use carsales_core::constants::{DEFAULT_CAR_CSV, DEFAULT_CONSUMER_CSV, DEFAULT_REPORT_PATH};
use carsales_core::{DbConfig, LoggingConfig, ProcessEnv};
use carsales_storage::PgStorage;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "carsales")]
#[command(about = "Load car sales CSV data into PostgreSQL and report sales per year", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create car_data and consumer_data if they are missing
    Init,
    /// Append a CSV file to a table; the file's first line is skipped
    Load {
        #[arg(short, long)]
        file: PathBuf,
        #[arg(short, long)]
        table: String,
        /// Column names in file order; defaults to the table's columns
        #[arg(short, long, value_delimiter = ',')]
        columns: Vec<String>,
    },
    /// Run SQL and print the result as JSON
    Query { sql: String },
    /// Render quantity sold per year and engine type
    Report {
        #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,
    },
    /// Provision tables, load both CSV files and render the report
    Run {
        #[arg(long, default_value = DEFAULT_CAR_CSV)]
        car_csv: PathBuf,
        #[arg(long, default_value = DEFAULT_CONSUMER_CSV)]
        consumer_csv: PathBuf,
        #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the variables may come from the real environment.
    let _ = dotenvy::dotenv();
    LoggingConfig::from_env(&ProcessEnv).init();

    let cli = Cli::parse();
    let config = DbConfig::from_env(&ProcessEnv)?;
    let storage = PgStorage::connect(&config)?;

    let result = match cli.command {
        Commands::Init => commands::init::run(&storage).await,
        Commands::Load { file, table, columns } => {
            commands::load::run(&storage, &file, &table, columns).await
        },
        Commands::Query { sql } => commands::query::run(&storage, &sql).await,
        Commands::Report { output } => commands::report::run(&storage, output).await,
        Commands::Run { car_csv, consumer_csv, output } => {
            commands::pipeline::run(&storage, &car_csv, &consumer_csv, output).await
        },
    };

    storage.close().await;
    result
}

use std::path::PathBuf;

use anyhow::Result;
use carsales_service::{SvgChartRenderer, render_sales_report};
use carsales_storage::PgStorage;

pub(crate) async fn run(storage: &PgStorage, output: PathBuf) -> Result<()> {
    let mut renderer = SvgChartRenderer::new(output);
    render_sales_report(storage, &mut renderer).await?;
    println!("report written to {}", renderer.output().display());
    Ok(())
}

//! Sales report: quantity sold per year and engine type.

mod svg;

use std::collections::HashMap;

use carsales_core::{TableError, TypedRow, Value, type_mismatch};
use carsales_storage::QueryStore;

use crate::error::ServiceError;
use crate::query::run_query;

pub use svg::SvgChartRenderer;

/// Total sales volume per (year, engine type), joined on make and model.
pub const SALES_BY_YEAR_QUERY: &str = r#"
    SELECT consumer_data."Year", car_data."Engine_Type", SUM(consumer_data."Sales_Volume") as total
    FROM car_data
    INNER JOIN consumer_data ON car_data."Make" = consumer_data."Make"
                            AND car_data."Model" = consumer_data."Model"
    GROUP BY consumer_data."Year", car_data."Engine_Type"
    ORDER BY consumer_data."Year";
    "#;

pub const REPORT_TITLE: &str = "Quantity Sold per Year and Engine Type";
pub const LEGEND_TITLE: &str = "Engine Type";

/// One row of [`SALES_BY_YEAR_QUERY`]. SQL NULLs are kept as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRow {
    pub year: Option<i64>,
    pub engine_type: Option<String>,
    pub total: Option<i64>,
}

impl TypedRow for SalesRow {
    const COLUMNS: &'static [&'static str] = &["Year", "Engine_Type", "total"];

    fn from_values(row: usize, values: &[&Value]) -> Result<Self, TableError> {
        let year = match values[0] {
            Value::Null => None,
            Value::Integer(v) => Some(*v),
            other => return Err(type_mismatch("Year", row, "integer", other)),
        };
        let engine_type = match values[1] {
            Value::Null => None,
            Value::Text(s) => Some(s.clone()),
            other => return Err(type_mismatch("Engine_Type", row, "text", other)),
        };
        let total = match values[2] {
            Value::Null => None,
            Value::Integer(v) => Some(*v),
            other => return Err(type_mismatch("total", row, "integer", other)),
        };
        Ok(Self { year, engine_type, total })
    }
}

/// One bar: an index into `categories`, an index into `groups`, and its height.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub category: usize,
    pub group: usize,
    pub height: f64,
}

/// Renderer-independent description of a grouped bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBarChart {
    pub title: String,
    /// Column plotted on the x axis.
    pub x: String,
    /// Column giving bar heights.
    pub y: String,
    /// Column splitting bars into colored groups.
    pub hue: String,
    pub legend_title: String,
    pub categories: Vec<String>,
    pub groups: Vec<String>,
    pub bars: Vec<Bar>,
}

impl GroupedBarChart {
    /// Build the sales chart. Years keep query order, engine types keep first-seen
    /// order, and rows with a NULL year, engine type or total are left out.
    #[must_use]
    #[allow(clippy::cast_precision_loss, reason = "sales totals fit comfortably in f64")]
    pub fn from_sales(rows: &[SalesRow]) -> Self {
        let mut categories: Vec<String> = Vec::new();
        let mut groups: Vec<String> = Vec::new();
        // (category, group) -> (sum, count); averaged like a categorical estimator.
        let mut cells: Vec<((usize, usize), (f64, u32))> = Vec::new();
        let mut cell_index: HashMap<(usize, usize), usize> = HashMap::new();

        for row in rows {
            let (Some(year), Some(engine), Some(total)) = (row.year, &row.engine_type, row.total)
            else {
                tracing::debug!(?row, "skipping sales row with NULL value");
                continue;
            };
            let year = year.to_string();
            let category = position_or_push(&mut categories, &year);
            let group = position_or_push(&mut groups, engine);

            let key = (category, group);
            if let Some(&idx) = cell_index.get(&key) {
                let (sum, count) = &mut cells[idx].1;
                *sum += total as f64;
                *count += 1;
            } else {
                cell_index.insert(key, cells.len());
                cells.push((key, (total as f64, 1)));
            }
        }

        let bars = cells
            .into_iter()
            .map(|((category, group), (sum, count))| Bar {
                category,
                group,
                height: sum / f64::from(count),
            })
            .collect();

        Self {
            title: REPORT_TITLE.to_owned(),
            x: "Year".to_owned(),
            y: "total".to_owned(),
            hue: "Engine_Type".to_owned(),
            legend_title: LEGEND_TITLE.to_owned(),
            categories,
            groups,
            bars,
        }
    }

    #[must_use]
    pub fn max_height(&self) -> f64 {
        self.bars.iter().map(|b| b.height).fold(0.0, f64::max)
    }

    /// Height of the bar for `(category, group)`, if one was drawn.
    #[must_use]
    pub fn height(&self, category: &str, group: &str) -> Option<f64> {
        let c = self.categories.iter().position(|v| v == category)?;
        let g = self.groups.iter().position(|v| v == group)?;
        self.bars.iter().find(|b| b.category == c && b.group == g).map(|b| b.height)
    }
}

fn position_or_push(values: &mut Vec<String>, value: &str) -> usize {
    if let Some(idx) = values.iter().position(|v| v == value) {
        idx
    } else {
        values.push(value.to_owned());
        values.len() - 1
    }
}

/// Something that can draw a [`GroupedBarChart`] and then present it.
pub trait ChartRenderer {
    /// Lay out the bar chart.
    fn bar_plot(&mut self, chart: &GroupedBarChart) -> Result<(), ServiceError>;

    /// Present what was plotted. Blocks until done.
    fn show(&mut self) -> Result<(), ServiceError>;
}

/// Run [`SALES_BY_YEAR_QUERY`] and render it: one bar plot, then one show.
pub async fn render_sales_report<Q, R>(store: &Q, renderer: &mut R) -> Result<(), ServiceError>
where
    Q: QueryStore + ?Sized,
    R: ChartRenderer + ?Sized,
{
    let table = run_query(store, SALES_BY_YEAR_QUERY).await?;
    let rows: Vec<SalesRow> = table.decode()?;
    let chart = GroupedBarChart::from_sales(&rows);
    tracing::info!(
        years = chart.categories.len(),
        engine_types = chart.groups.len(),
        "rendering sales report"
    );

    renderer.bar_plot(&chart)?;
    renderer.show()?;
    Ok(())
}

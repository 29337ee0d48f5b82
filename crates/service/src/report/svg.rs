//! SVG output for [`GroupedBarChart`] via plotters.

use std::error::Error;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{ChartRenderer, GroupedBarChart};
use crate::error::ServiceError;

/// 10x10 inch figure at 100 dpi.
const DEFAULT_SIZE: (u32, u32) = (1000, 1000);

/// Share of the figure width given to the plot; the rest holds the legend.
const PLOT_WIDTH_PERCENT: u32 = 80;

/// Fraction of each year's slot covered by bars.
const GROUP_WIDTH: f64 = 0.8;

/// Seaborn "deep" palette.
const PALETTE: [RGBColor; 10] = [
    RGBColor(76, 114, 176),
    RGBColor(221, 132, 82),
    RGBColor(85, 168, 104),
    RGBColor(196, 78, 82),
    RGBColor(129, 114, 179),
    RGBColor(147, 120, 96),
    RGBColor(218, 139, 195),
    RGBColor(140, 140, 140),
    RGBColor(204, 185, 116),
    RGBColor(100, 181, 205),
];

fn palette(idx: usize) -> RGBColor {
    PALETTE[idx % PALETTE.len()]
}

/// Writes the plotted chart to an SVG file when shown.
#[derive(Debug)]
pub struct SvgChartRenderer {
    output: PathBuf,
    size: (u32, u32),
    staged: Option<GroupedBarChart>,
}

impl SvgChartRenderer {
    #[must_use]
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self { output: output.into(), size: DEFAULT_SIZE, staged: None }
    }

    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn bar_plot(&mut self, chart: &GroupedBarChart) -> Result<(), ServiceError> {
        self.staged = Some(chart.clone());
        Ok(())
    }

    fn show(&mut self) -> Result<(), ServiceError> {
        let chart = self
            .staged
            .take()
            .ok_or_else(|| ServiceError::Render("nothing plotted before show".to_owned()))?;
        draw(&chart, &self.output, self.size).map_err(|e| ServiceError::Render(e.to_string()))?;
        tracing::info!(path = %self.output.display(), "report written");
        Ok(())
    }
}

#[allow(clippy::cast_precision_loss, reason = "category and group counts are small")]
fn draw(chart: &GroupedBarChart, path: &Path, size: (u32, u32)) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let plot_width = i32::try_from(size.0 * PLOT_WIDTH_PERCENT / 100)?;
    let (plot_area, legend_area) = root.split_horizontally(plot_width);

    let slots = chart.categories.len().max(1);
    let y_max = chart.max_height().max(1.0) * 1.05;

    let mut ctx = ChartBuilder::on(&plot_area)
        .caption(&chart.title, ("sans-serif", 24.0))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(0f64..slots as f64, 0f64..y_max)?;

    // Numeric ticks carry no meaning on the year axis; years are drawn per slot below.
    ctx.configure_mesh()
        .disable_x_mesh()
        .x_desc(&chart.x)
        .y_desc(&chart.y)
        .x_label_formatter(&|_: &f64| String::new())
        .draw()?;

    let year_style = TextStyle::from(("sans-serif", 12.0).into_font())
        .pos(Pos::new(HPos::Center, VPos::Top));
    for (idx, year) in chart.categories.iter().enumerate() {
        let (x, y) = ctx.backend_coord(&(idx as f64 + 0.5, 0.0));
        root.draw(&Text::new(year.clone(), (x, y + 8), year_style.clone()))?;
    }

    let band = GROUP_WIDTH / chart.groups.len().max(1) as f64;
    let offset = (1.0 - GROUP_WIDTH) / 2.0;
    ctx.draw_series(chart.bars.iter().map(|bar| {
        let x0 = bar.category as f64 + offset + band * bar.group as f64;
        Rectangle::new([(x0, 0.0), (x0 + band, bar.height)], palette(bar.group).filled())
    }))?;

    // Legend lives in its own area to the right of the plot.
    legend_area.draw(&Text::new(chart.legend_title.clone(), (10, 60), ("sans-serif", 14.0)))?;
    for (idx, name) in chart.groups.iter().enumerate() {
        let y = 90 + i32::try_from(idx)? * 24;
        legend_area.draw(&Rectangle::new([(10, y), (28, y + 14)], palette(idx).filled()))?;
        legend_area.draw(&Text::new(name.clone(), (36, y), ("sans-serif", 12.0)))?;
    }

    root.present()?;
    Ok(())
}

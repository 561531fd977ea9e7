use plotters::coord::Shift;
use plotters::prelude::*;

use crate::data::RenderPlan;

use super::chart::{build_series, PlotError};
use super::styles::{palette_color, ChartTheme};

/// Draw a pie chart of the plan's records.
///
/// Slice labels follow the plan's label mode. Zero-value entries are dropped
/// since they have no arc; an empty series leaves the backdrop and title
/// only.
pub(crate) fn draw_pie(
    plan: &RenderPlan,
    root: &DrawingArea<BitMapBackend, Shift>,
    theme: &ChartTheme,
) -> Result<(), PlotError> {
    let root = root.titled(
        &plan.title,
        ("sans-serif", 30).into_font().color(&theme.text_color),
    )?;

    let series: Vec<(String, u64)> = build_series(plan)
        .into_iter()
        .filter(|(_, value)| *value > 0)
        .collect();
    if series.is_empty() {
        return Ok(());
    }

    let sizes: Vec<f64> = series.iter().map(|(_, value)| *value as f64).collect();
    let labels: Vec<String> = series.iter().map(|(label, _)| label.clone()).collect();
    let colors: Vec<RGBColor> = (0..series.len()).map(palette_color).collect();

    let (width, height) = root.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.35;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 16).into_font().color(&theme.text_color));
    root.draw(&pie)?;

    Ok(())
}

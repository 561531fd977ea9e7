use lru::LruCache;
use once_cell::sync::Lazy;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;
use std::fs;
use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::app::App;
use crate::data::{resolve, RenderPlan, ResolveMode};
use crate::types::{ChartKind, FilterSelection, LabelMode};
use crate::utils::unique_values;

use super::styles::{ChartStyle, ChartTheme, SERIES_COLOR};
use super::{pie, treemap};

pub type PlotError = Box<dyn Error + Send + Sync>;

/// Rendered chart size in pixels.
pub const CHART_SIZE: (u32, u32) = (900, 540);

// Global chart cache with a 5-minute expiration
static CHART_CACHE: Lazy<Mutex<LruCache<ChartCacheKey, (Vec<u8>, Instant)>>> =
    Lazy::new(|| Mutex::new(LruCache::new(NonZeroUsize::new(10).unwrap()))); // Cache up to 10 charts

#[derive(Hash, Eq, PartialEq)]
struct ChartCacheKey {
    selection: FilterSelection,
    data_hash: u64,
}

impl ChartCacheKey {
    fn new(app: &App) -> Self {
        use std::hash::{Hash, Hasher};
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        app.combined.hash(&mut hasher);

        Self {
            selection: app.selection(),
            data_hash: hasher.finish(),
        }
    }
}

// Helper function to wrap errors
fn wrap_err<E>(e: E) -> PlotError
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    e.into()
}

/// Render the chart for the current app state, returning encoded PNG bytes.
pub fn generate_chart(app: &App) -> Result<Vec<u8>, PlotError> {
    let cache_key = ChartCacheKey::new(app);

    // Try to get from cache first
    if let Ok(mut cache) = CHART_CACHE.lock() {
        if let Some((bytes, timestamp)) = cache.get(&cache_key) {
            if timestamp.elapsed() < Duration::from_secs(300) {
                return Ok(bytes.clone());
            }
        }
    }

    let plan = resolve(&app.selection(), &app.combined);

    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .map_err(wrap_err)?;
    {
        let root = BitMapBackend::new(file.path(), CHART_SIZE).into_drawing_area();
        draw_chart(&plan, &root)?;
        root.present()?;
    }
    let bytes = fs::read(file.path()).map_err(wrap_err)?;

    if let Ok(mut cache) = CHART_CACHE.lock() {
        cache.put(cache_key, (bytes.clone(), Instant::now()));
    }

    Ok(bytes)
}

/// Draw the resolved plan onto a drawing area.
pub fn draw_chart(plan: &RenderPlan, root: &DrawingArea<BitMapBackend, Shift>) -> Result<(), PlotError> {
    let theme = ChartTheme::default();
    root.fill(&theme.background_color).map_err(wrap_err)?;

    match plan.chart {
        ChartKind::Line | ChartKind::Bar => draw_cartesian(plan, root, &theme),
        ChartKind::Pie => pie::draw_pie(plan, root, &theme),
        ChartKind::Treemap => treemap::draw_treemap(plan, root, &theme),
    }
}

/// One labelled chart value.
pub(crate) type SeriesPoint = (String, u64);

/// Shared series builder used by every renderer.
///
/// A comparison without the by-quarter flag presents yearly totals in first
/// occurrence order; every other plan presents one value per record,
/// labelled per the plan's label mode.
pub(crate) fn build_series(plan: &RenderPlan) -> Vec<SeriesPoint> {
    if plan.mode == ResolveMode::Comparison && !plan.by_quarter {
        let years = unique_values(&plan.records, |r| r.year.as_str());
        years
            .into_iter()
            .map(|year| {
                let total = plan
                    .records
                    .iter()
                    .filter(|r| r.year == year)
                    .map(|r| r.total_count)
                    .sum();
                (year, total)
            })
            .collect()
    } else {
        plan.records
            .iter()
            .map(|r| {
                let label = match plan.label_mode {
                    LabelMode::Period => r.period_label(),
                    LabelMode::Name => r.name.clone(),
                };
                (label, r.total_count)
            })
            .collect()
    }
}

/// Y-axis range for a value series, with headroom above the peak.
pub(crate) fn value_range(values: &[u64]) -> (f64, f64) {
    let max = values.iter().copied().max().unwrap_or(0);
    if max == 0 {
        (0.0, 1.0)
    } else {
        (0.0, max as f64 * 1.1)
    }
}

fn draw_cartesian(
    plan: &RenderPlan,
    root: &DrawingArea<BitMapBackend, Shift>,
    theme: &ChartTheme,
) -> Result<(), PlotError> {
    let style = ChartStyle::default();
    let series = build_series(plan);
    let labels: Vec<String> = series.iter().map(|(label, _)| label.clone()).collect();
    let values: Vec<u64> = series.iter().map(|(_, value)| *value).collect();
    let (min_val, max_val) = value_range(&values);

    let mut chart = ChartBuilder::on(root)
        .caption(
            &plan.title,
            ("sans-serif", 30).into_font().color(&theme.text_color),
        )
        .margin(style.margin)
        .x_label_area_size(style.label_area_size + 20)
        .y_label_area_size(style.label_area_size)
        .build_cartesian_2d(0f64..(series.len().max(1) as f64), min_val..max_val)?;

    let mut mesh = chart.configure_mesh();

    // Keep the labels alive for the formatter closure
    let labels_clone = labels.clone();
    let x_label_formatter = move |x: &f64| {
        let idx = *x as usize;
        if idx < labels_clone.len() {
            // Show fewer labels to prevent overlap
            if idx == 0
                || idx == labels_clone.len() - 1
                || idx % (labels_clone.len() / 8).max(1) == 0
            {
                labels_clone[idx].clone()
            } else {
                String::new()
            }
        } else {
            String::new()
        }
    };

    mesh.light_line_style(TRANSPARENT)
        .bold_line_style(theme.grid_color)
        .axis_style(theme.axis_color)
        .x_labels(labels.len().clamp(2, 20))
        .y_desc("Issues + PRs")
        .label_style(
            ("sans-serif", style.font_size)
                .into_font()
                .color(&theme.text_color),
        )
        .x_label_formatter(&x_label_formatter)
        // Rotate x labels for better readability
        .x_label_style(
            ("sans-serif", style.font_size)
                .into_font()
                .color(&theme.text_color)
                .transform(FontTransform::Rotate90)
                .pos(Pos::new(HPos::Right, VPos::Center)),
        )
        // Use K/M formatting for large numbers
        .y_label_formatter(&|y| {
            if y.abs() >= 1_000_000.0 {
                format!("{:.1}M", y / 1_000_000.0)
            } else if y.abs() >= 1_000.0 {
                format!("{:.1}K", y / 1_000.0)
            } else {
                format!("{:.0}", y)
            }
        });

    mesh.draw()?;

    if series.is_empty() {
        return Ok(());
    }

    match plan.chart {
        ChartKind::Line => draw_line_series(&mut chart, &values, &style)?,
        ChartKind::Bar => draw_bar_series(&mut chart, &values)?,
        _ => {}
    }

    chart
        .configure_series_labels()
        .background_style(theme.background_color.mix(0.8))
        .border_style(theme.grid_color)
        .label_font(
            ("sans-serif", style.font_size)
                .into_font()
                .color(&theme.text_color),
        )
        .draw()?;

    Ok(())
}

fn draw_line_series(
    chart: &mut ChartContext<BitMapBackend, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    values: &[u64],
    style: &ChartStyle,
) -> Result<(), PlotError> {
    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v as f64))
        .collect();

    // Draw a subtle glow under the main line
    let glow_color = SERIES_COLOR.mix(0.3);
    chart.draw_series(LineSeries::new(
        points.clone(),
        glow_color.stroke_width(style.line_width * 2),
    ))?;

    chart
        .draw_series(LineSeries::new(
            points,
            SERIES_COLOR.stroke_width(style.line_width),
        ))?
        .label("Issues + PRs")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], SERIES_COLOR));

    Ok(())
}

fn draw_bar_series(
    chart: &mut ChartContext<BitMapBackend, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    values: &[u64],
) -> Result<(), PlotError> {
    let bar_width = 0.8;

    chart
        .draw_series(values.iter().enumerate().map(|(i, v)| {
            let x0 = i as f64;
            let x1 = x0 + bar_width;
            Rectangle::new([(x0, 0.0), (x1, *v as f64)], SERIES_COLOR.mix(0.6).filled())
        }))?
        .label("Issues + PRs")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 5), (x + 20, y + 5)], SERIES_COLOR.mix(0.6).filled())
        });

    Ok(())
}

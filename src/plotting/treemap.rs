use plotters::coord::Shift;
use plotters::prelude::*;

use crate::data::RenderPlan;

use super::chart::{build_series, PlotError};
use super::styles::{ChartTheme, TREEMAP_FILL};

/// One laid-out treemap tile in pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Tile {
    pub label: String,
    pub value: f64,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Tile {
    fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// Draw a treemap of the plan's records.
pub(crate) fn draw_treemap(
    plan: &RenderPlan,
    root: &DrawingArea<BitMapBackend, Shift>,
    theme: &ChartTheme,
) -> Result<(), PlotError> {
    let root = root.titled(
        &plan.title,
        ("sans-serif", 30).into_font().color(&theme.text_color),
    )?;
    let root = root.margin(10, 10, 10, 10);

    let series = build_series(plan);
    let (width, height) = root.dim_in_pixel();
    let tiles = layout_tiles(&series, f64::from(width), f64::from(height));

    for tile in &tiles {
        let rect = [
            (tile.x0 as i32, tile.y0 as i32),
            (tile.x1 as i32, tile.y1 as i32),
        ];
        root.draw(&Rectangle::new(rect, TREEMAP_FILL.filled()))?;
        root.draw(&Rectangle::new(rect, BLACK.stroke_width(1)))?;

        // Labels on tiles too small to hold them would spill over
        if tile.width() > 60.0 && tile.height() > 24.0 {
            root.draw(&Text::new(
                tile.label.clone(),
                (tile.x0 as i32 + 8, tile.y0 as i32 + 10),
                ("sans-serif", 15).into_font().color(&WHITE),
            ))?;
        }
    }

    Ok(())
}

/// Squarified treemap layout: tile areas are proportional to values and the
/// whole rectangle is covered.
///
/// Zero-value entries are skipped since they have no area. Values are placed
/// largest first, which keeps tile aspect ratios close to square.
pub(crate) fn layout_tiles(items: &[(String, u64)], width: f64, height: f64) -> Vec<Tile> {
    let mut items: Vec<(String, f64)> = items
        .iter()
        .filter(|(_, value)| *value > 0)
        .map(|(label, value)| (label.clone(), *value as f64))
        .collect();
    if items.is_empty() || width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    items.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let total: f64 = items.iter().map(|(_, value)| value).sum();
    let scale = width * height / total;
    let areas: Vec<f64> = items.iter().map(|(_, value)| value * scale).collect();

    let mut tiles = Vec::with_capacity(items.len());
    let (mut x, mut y, mut w, mut h) = (0.0, 0.0, width, height);
    let mut start = 0;

    while start < items.len() {
        // Grow the strip while adding the next area improves the worst ratio
        let side = w.min(h);
        let mut end = start + 1;
        let mut ratio = worst_ratio(&areas[start..end], side);
        while end < items.len() {
            let next = worst_ratio(&areas[start..=end], side);
            if next > ratio {
                break;
            }
            ratio = next;
            end += 1;
        }

        let strip_area: f64 = areas[start..end].iter().sum();
        if w >= h {
            // Vertical strip along the left edge
            let strip_w = strip_area / h;
            let mut cy = y;
            for i in start..end {
                let tile_h = areas[i] / strip_w;
                tiles.push(Tile {
                    label: items[i].0.clone(),
                    value: items[i].1,
                    x0: x,
                    y0: cy,
                    x1: x + strip_w,
                    y1: cy + tile_h,
                });
                cy += tile_h;
            }
            x += strip_w;
            w -= strip_w;
        } else {
            // Horizontal strip along the top edge
            let strip_h = strip_area / w;
            let mut cx = x;
            for i in start..end {
                let tile_w = areas[i] / strip_h;
                tiles.push(Tile {
                    label: items[i].0.clone(),
                    value: items[i].1,
                    x0: cx,
                    y0: y,
                    x1: cx + tile_w,
                    y1: y + strip_h,
                });
                cx += tile_w;
            }
            y += strip_h;
            h -= strip_h;
        }

        start = end;
    }

    tiles
}

/// Worst (largest) tile aspect ratio a strip of `areas` would have when laid
/// along a rectangle side of length `side`.
fn worst_ratio(areas: &[f64], side: f64) -> f64 {
    let sum: f64 = areas.iter().sum();
    let strip = sum / side;
    areas
        .iter()
        .map(|area| {
            let other = area / strip;
            (strip / other).max(other / strip)
        })
        .fold(0.0, f64::max)
}

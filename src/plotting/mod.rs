//! Chart rendering: a cached PNG pipeline that dispatches the resolved
//! render plan to the line, bar, pie, and treemap renderers.

mod chart;
mod pie;
pub mod styles;
mod treemap;

pub use chart::{draw_chart, generate_chart, PlotError, CHART_SIZE};

#[cfg(test)]
mod tests;

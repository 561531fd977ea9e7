//! # Common Types
//!
//! This module contains the common types used throughout the application for
//! representing the loaded dataset, filter selections, and chart choices.

/// Dropdown entry meaning "no criterion"; maps to an empty filter value.
pub const ALL_OPTION: &str = "All";

/// One combined activity record: issue count plus pull-request count for a
/// language in one year/quarter period.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CombinedRecord {
    /// The language (or repository) name
    pub name: String,
    /// Calendar year label, e.g. "2021"
    pub year: String,
    /// Quarter label, "1" through "4"
    pub quarter: String,
    /// Issue count + pull-request count for this key
    pub total_count: u64,
}

impl CombinedRecord {
    /// Category label for one period, e.g. `"2021 Q3"`.
    pub fn period_label(&self) -> String {
        format!("{} Q{}", self.year, self.quarter)
    }

    /// The join key of this record.
    pub fn key(&self) -> RecordKey {
        RecordKey {
            name: self.name.clone(),
            year: self.year.clone(),
            quarter: self.quarter.clone(),
        }
    }
}

/// The key the issue and pull-request tables are joined on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    /// The language (or repository) name
    pub name: String,
    /// Calendar year label
    pub year: String,
    /// Quarter label
    pub quarter: String,
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} Q{}", self.name, self.year, self.quarter)
    }
}

/// Everything derived from one successful load of the three source tables.
///
/// The combined records drive every chart; the three option lists populate
/// the filter dropdowns and are fixed for the session.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Combined issue + pull-request records, in issues-table order
    pub combined: Vec<CombinedRecord>,
    /// Distinct years, first-seen order
    pub years: Vec<String>,
    /// Distinct quarters, first-seen order
    pub quarters: Vec<String>,
    /// Distinct languages, first-seen order
    pub languages: Vec<String>,
}

/// Which chart the dashboard draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartKind {
    /// Line chart over periods
    #[default]
    Line,
    /// Bar chart over periods
    Bar,
    /// Pie chart of record shares
    Pie,
    /// Treemap of record shares
    Treemap,
}

impl ChartKind {
    /// All chart kinds, in UI order.
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::Pie,
        ChartKind::Treemap,
    ];

    /// Human-readable button label.
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Line => "Line",
            ChartKind::Bar => "Bar",
            ChartKind::Pie => "Pie",
            ChartKind::Treemap => "Treemap",
        }
    }
}

/// How pie slices, treemap tiles, and category axes are labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelMode {
    /// Label by period, `"<year> Q<quarter>"`; used when one language is shown
    Period,
    /// Label by language name; used when records span several languages
    Name,
}

/// A snapshot of the UI filter state, built on every filter-change event.
///
/// Empty `year`/`quarter`/`language` strings mean "no criterion" and match
/// every record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FilterSelection {
    /// Selected year, or empty for all years
    pub year: String,
    /// Selected quarter, or empty for all quarters
    pub quarter: String,
    /// Selected language, or empty for all languages
    pub language: String,
    /// Compare across every year regardless of the year selection
    pub show_all_years: bool,
    /// Present one point per quarter instead of yearly totals
    pub show_all_quarters: bool,
    /// The chart to render the resolved records with
    pub chart: ChartKind,
}

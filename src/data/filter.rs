use crate::types::{ChartKind, CombinedRecord, FilterSelection, LabelMode};

/// How the resolver scoped the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    /// One specific year/quarter/language combination
    Point,
    /// A language's history across years and/or quarters
    Comparison,
}

/// Everything a chart renderer needs: the final record subset plus the
/// presentation flags. Renderers trust the plan and never re-filter.
#[derive(Debug, Clone)]
pub struct RenderPlan {
    pub records: Vec<CombinedRecord>,
    pub chart: ChartKind,
    pub mode: ResolveMode,
    /// Present one value per quarter instead of yearly totals
    pub by_quarter: bool,
    pub label_mode: LabelMode,
    pub title: String,
}

/// Records matching all three criteria. An empty criterion matches
/// everything.
pub fn filter_records(
    records: &[CombinedRecord],
    year: &str,
    quarter: &str,
    language: &str,
) -> Vec<CombinedRecord> {
    records
        .iter()
        .filter(|r| {
            (year.is_empty() || r.year == year)
                && (quarter.is_empty() || r.quarter == quarter)
                && (language.is_empty() || r.name == language)
        })
        .cloned()
        .collect()
}

/// Decide which records feed the chart and how they are presented.
///
/// Comparison mode applies when `show_all_years` is set, or when
/// `show_all_quarters` is set without a selected quarter; it scopes by
/// language only so the records span every period. Point mode scopes by all
/// three criteria.
pub fn resolve(selection: &FilterSelection, records: &[CombinedRecord]) -> RenderPlan {
    let comparison = selection.show_all_years
        || (selection.show_all_quarters && selection.quarter.is_empty());

    let (records, mode) = if comparison {
        (
            filter_records(records, "", "", &selection.language),
            ResolveMode::Comparison,
        )
    } else {
        (
            filter_records(
                records,
                &selection.year,
                &selection.quarter,
                &selection.language,
            ),
            ResolveMode::Point,
        )
    };

    let label_mode = if selection.language.is_empty() {
        LabelMode::Name
    } else {
        LabelMode::Period
    };

    RenderPlan {
        title: title_for(selection, mode),
        records,
        chart: selection.chart,
        mode,
        by_quarter: selection.show_all_quarters,
        label_mode,
    }
}

fn title_for(selection: &FilterSelection, mode: ResolveMode) -> String {
    let scope = if selection.language.is_empty() {
        "All languages"
    } else {
        selection.language.as_str()
    };

    match mode {
        ResolveMode::Comparison => {
            if selection.show_all_quarters {
                format!("Issues + PRs: {} by quarter", scope)
            } else {
                format!("Issues + PRs: {} by year", scope)
            }
        }
        ResolveMode::Point => {
            let year = if selection.year.is_empty() {
                "all years"
            } else {
                selection.year.as_str()
            };
            if selection.quarter.is_empty() {
                format!("Issues + PRs: {}, {}", scope, year)
            } else {
                format!("Issues + PRs: {}, {} Q{}", scope, year, selection.quarter)
            }
        }
    }
}

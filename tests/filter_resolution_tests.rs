//! End-to-end checks that the filter resolver gives renderers a final,
//! fully scoped record set for every toggle combination.

use langtrends::data::{combine, resolve, CountRow, RenderPlan, ResolveMode};
use langtrends::types::{CombinedRecord, FilterSelection, LabelMode};

fn count_row(name: &str, year: &str, quarter: &str, count: u64) -> CountRow {
    CountRow {
        name: name.to_string(),
        year: year.to_string(),
        quarter: quarter.to_string(),
        count,
    }
}

/// Two languages, two years, two quarters, joined through the real pipeline.
fn dataset() -> Vec<CombinedRecord> {
    let mut issues = Vec::new();
    let mut prs = Vec::new();
    for name in ["Rust", "Go"] {
        for year in ["2021", "2022"] {
            for quarter in ["1", "2"] {
                issues.push(count_row(name, year, quarter, 10));
                prs.push(count_row(name, year, quarter, 5));
            }
        }
    }
    combine(&issues, &prs).unwrap()
}

fn selection(
    year: &str,
    quarter: &str,
    language: &str,
    show_all_years: bool,
    show_all_quarters: bool,
) -> FilterSelection {
    FilterSelection {
        year: year.to_string(),
        quarter: quarter.to_string(),
        language: language.to_string(),
        show_all_years,
        show_all_quarters,
        ..Default::default()
    }
}

/// Every record in the plan already satisfies the criteria its mode scopes
/// by, so a renderer has nothing left to narrow.
fn assert_plan_scoped(plan: &RenderPlan, sel: &FilterSelection) {
    for record in &plan.records {
        assert!(
            sel.language.is_empty() || record.name == sel.language,
            "record {:?} escapes the language criterion",
            record
        );
        if plan.mode == ResolveMode::Point {
            assert!(sel.year.is_empty() || record.year == sel.year);
            assert!(sel.quarter.is_empty() || record.quarter == sel.quarter);
        }
    }
}

#[test]
fn test_mode_truth_table() {
    let records = dataset();
    let cases = [
        // (show_all_years, show_all_quarters, quarter, expected mode)
        (true, false, "", ResolveMode::Comparison),
        (true, false, "2", ResolveMode::Comparison),
        (true, true, "", ResolveMode::Comparison),
        (true, true, "2", ResolveMode::Comparison),
        (false, true, "", ResolveMode::Comparison),
        (false, true, "2", ResolveMode::Point),
        (false, false, "", ResolveMode::Point),
        (false, false, "2", ResolveMode::Point),
    ];

    for (show_all_years, show_all_quarters, quarter, expected) in cases {
        let sel = selection("2021", quarter, "Rust", show_all_years, show_all_quarters);
        let plan = resolve(&sel, &records);
        assert_eq!(
            plan.mode, expected,
            "toggles ({show_all_years}, {show_all_quarters}) with quarter {quarter:?}"
        );
        assert_plan_scoped(&plan, &sel);
    }
}

#[test]
fn test_comparison_spans_every_year_despite_selection() {
    let records = dataset();
    let sel = selection("2021", "1", "Rust", true, false);

    let plan = resolve(&sel, &records);

    let mut years: Vec<&str> = plan.records.iter().map(|r| r.year.as_str()).collect();
    years.dedup();
    assert_eq!(years, vec!["2021", "2022"]);
    assert_eq!(plan.records.len(), 4);
}

#[test]
fn test_point_mode_honors_every_criterion() {
    let records = dataset();
    let sel = selection("2022", "2", "Go", false, false);

    let plan = resolve(&sel, &records);

    assert_eq!(plan.records.len(), 1);
    let record = &plan.records[0];
    assert_eq!(record.name, "Go");
    assert_eq!(record.year, "2022");
    assert_eq!(record.quarter, "2");
    assert_eq!(record.total_count, 15);
}

#[test]
fn test_quarter_beats_by_quarter_toggle() {
    let records = dataset();
    let sel = selection("", "1", "Rust", false, true);

    let plan = resolve(&sel, &records);

    assert_eq!(plan.mode, ResolveMode::Point);
    assert!(plan.records.iter().all(|r| r.quarter == "1"));
    assert_eq!(plan.records.len(), 2);
}

#[test]
fn test_empty_language_compares_all_languages() {
    let records = dataset();
    let sel = selection("", "", "", true, false);

    let plan = resolve(&sel, &records);

    assert_eq!(plan.records.len(), records.len());
    assert_eq!(plan.label_mode, LabelMode::Name);
}

#[test]
fn test_selected_language_labels_by_period() {
    let records = dataset();
    let sel = selection("", "", "Rust", false, true);

    let plan = resolve(&sel, &records);

    assert_eq!(plan.label_mode, LabelMode::Period);
    assert!(plan.by_quarter);
}

#[test]
fn test_unmatched_criteria_give_an_empty_plan() {
    let records = dataset();
    let sel = selection("2030", "", "Rust", false, false);

    let plan = resolve(&sel, &records);

    assert!(plan.records.is_empty());
    assert_eq!(plan.mode, ResolveMode::Point);
}

use super::chart::{build_series, value_range};
use super::generate_chart;
use super::treemap::layout_tiles;
use crate::app::App;
use crate::data::{RenderPlan, ResolveMode};
use crate::types::{ChartKind, CombinedRecord, LabelMode};
use pretty_assertions::assert_eq;

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn record(name: &str, year: &str, quarter: &str, total_count: u64) -> CombinedRecord {
    CombinedRecord {
        name: name.to_string(),
        year: year.to_string(),
        quarter: quarter.to_string(),
        total_count,
    }
}

fn rust_history() -> Vec<CombinedRecord> {
    vec![
        record("Rust", "2021", "1", 5),
        record("Rust", "2021", "2", 7),
        record("Rust", "2022", "1", 11),
    ]
}

fn plan(records: Vec<CombinedRecord>, mode: ResolveMode, by_quarter: bool, label_mode: LabelMode) -> RenderPlan {
    RenderPlan {
        records,
        chart: ChartKind::Line,
        mode,
        by_quarter,
        label_mode,
        title: "test".to_string(),
    }
}

fn setup_test_app() -> App {
    let mut app = App::default();
    app.combined = rust_history();
    app.years = vec!["2021".to_string(), "2022".to_string()];
    app.quarters = vec!["1".to_string(), "2".to_string()];
    app.languages = vec!["Rust".to_string()];
    app
}

#[test]
fn test_value_range_empty_is_unit() {
    assert_eq!(value_range(&[]), (0.0, 1.0));
}

#[test]
fn test_value_range_all_zero_is_unit() {
    assert_eq!(value_range(&[0, 0]), (0.0, 1.0));
}

#[test]
fn test_value_range_adds_headroom() {
    let (min, max) = value_range(&[5, 100, 20]);
    assert_eq!(min, 0.0);
    assert!((max - 110.0).abs() < 1e-9);
}

#[test]
fn test_build_series_yearly_totals_for_comparison() {
    let plan = plan(
        rust_history(),
        ResolveMode::Comparison,
        false,
        LabelMode::Period,
    );

    let series = build_series(&plan);

    assert_eq!(
        series,
        vec![("2021".to_string(), 12), ("2022".to_string(), 11)]
    );
}

#[test]
fn test_build_series_per_quarter_for_comparison_with_flag() {
    let plan = plan(
        rust_history(),
        ResolveMode::Comparison,
        true,
        LabelMode::Period,
    );

    let series = build_series(&plan);

    assert_eq!(
        series,
        vec![
            ("2021 Q1".to_string(), 5),
            ("2021 Q2".to_string(), 7),
            ("2022 Q1".to_string(), 11),
        ]
    );
}

#[test]
fn test_build_series_point_mode_uses_name_labels_across_languages() {
    let records = vec![record("Rust", "2021", "1", 5), record("Go", "2021", "1", 3)];
    let plan = plan(records, ResolveMode::Point, false, LabelMode::Name);

    let series = build_series(&plan);

    assert_eq!(
        series,
        vec![("Rust".to_string(), 5), ("Go".to_string(), 3)]
    );
}

#[test]
fn test_build_series_empty_records() {
    let plan = plan(Vec::new(), ResolveMode::Point, false, LabelMode::Name);
    assert!(build_series(&plan).is_empty());
}

#[test]
fn test_generate_chart_every_kind_produces_png() {
    let app = setup_test_app();

    for kind in ChartKind::ALL {
        let mut test_app = app.clone();
        test_app.chart_kind = kind;
        test_app.selected_language = "Rust".to_string();
        test_app.show_all_years = true;

        let bytes = generate_chart(&test_app).unwrap();

        assert!(bytes.len() > PNG_MAGIC.len());
        assert_eq!(bytes[..8], PNG_MAGIC);
    }
}

#[test]
fn test_generate_chart_with_no_matching_records() {
    let mut app = setup_test_app();
    app.selected_language = "Fortran".to_string();

    for kind in ChartKind::ALL {
        app.chart_kind = kind;
        let bytes = generate_chart(&app).unwrap();
        assert_eq!(bytes[..8], PNG_MAGIC);
    }
}

#[test]
fn test_generate_chart_with_empty_dataset() {
    let app = App::default();

    let bytes = generate_chart(&app).unwrap();

    assert_eq!(bytes[..8], PNG_MAGIC);
}

#[test]
fn test_generate_chart_serves_repeat_requests_from_cache() {
    let mut app = setup_test_app();
    // A selection no other test uses, so the cache entry is this test's own
    app.combined = vec![record("Zig", "2024", "4", 17)];
    app.selected_language = "Zig".to_string();
    app.chart_kind = ChartKind::Bar;

    let first = generate_chart(&app).unwrap();
    let second = generate_chart(&app).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_treemap_layout_feeds_from_series_shapes() {
    let plan = plan(
        rust_history(),
        ResolveMode::Comparison,
        false,
        LabelMode::Period,
    );
    let series = build_series(&plan);

    let tiles = layout_tiles(&series, 300.0, 200.0);

    assert_eq!(tiles.len(), 2);
    let area: f64 = tiles
        .iter()
        .map(|t| (t.x1 - t.x0) * (t.y1 - t.y0))
        .sum();
    assert!((area - 60000.0).abs() < 1e-3);
}

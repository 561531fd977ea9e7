use eframe::App as EApp;
use egui::TextureHandle;
use std::sync::{Arc, Mutex};

use crate::types::{ChartKind, CombinedRecord, Dataset, ALL_OPTION};

/// Main application state
#[derive(Clone)]
pub struct App {
    pub data_dir: String,
    pub combined: Vec<CombinedRecord>,
    pub years: Vec<String>,
    pub quarters: Vec<String>,
    pub languages: Vec<String>,
    pub selected_year: String,
    pub selected_quarter: String,
    pub selected_language: String,
    pub show_all_years: bool,
    pub show_all_quarters: bool,
    pub chart_kind: ChartKind,
    pub chart_texture: Option<TextureHandle>,
    pub update_needed: bool,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl App {
    /// Snapshot the current filter state. The `"All"` dropdown choice
    /// becomes an empty criterion, which matches everything.
    pub fn selection(&self) -> crate::types::FilterSelection {
        crate::types::FilterSelection {
            year: criterion(&self.selected_year),
            quarter: criterion(&self.selected_quarter),
            language: criterion(&self.selected_language),
            show_all_years: self.show_all_years,
            show_all_quarters: self.show_all_quarters,
            chart: self.chart_kind,
        }
    }

    /// Install a freshly loaded dataset and schedule a re-render.
    pub fn update_with_dataset(&mut self, dataset: Dataset) {
        self.combined = dataset.combined;
        self.years = dataset.years;
        self.quarters = dataset.quarters;
        self.languages = dataset.languages;

        // Selections pointing at values the new data no longer has fall
        // back to the wildcard
        if self.selected_year != ALL_OPTION && !self.years.contains(&self.selected_year) {
            self.selected_year = ALL_OPTION.to_string();
        }
        if self.selected_quarter != ALL_OPTION && !self.quarters.contains(&self.selected_quarter) {
            self.selected_quarter = ALL_OPTION.to_string();
        }
        if self.selected_language != ALL_OPTION && !self.languages.contains(&self.selected_language)
        {
            self.selected_language = ALL_OPTION.to_string();
        }

        self.error_message = None;
        self.update_needed = true;
    }
}

fn criterion(selected: &str) -> String {
    if selected == ALL_OPTION {
        String::new()
    } else {
        selected.to_string()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            combined: Vec::new(),
            years: Vec::new(),
            quarters: Vec::new(),
            languages: Vec::new(),
            selected_year: ALL_OPTION.to_string(),
            selected_quarter: ALL_OPTION.to_string(),
            selected_language: ALL_OPTION.to_string(),
            show_all_years: false,
            show_all_quarters: false,
            chart_kind: ChartKind::Line,
            chart_texture: None,
            update_needed: false,
            is_loading: false,
            error_message: None,
        }
    }
}

/// Thread-safe wrapper around App for use with eframe
pub struct AppWrapper {
    pub app: Arc<Mutex<App>>,
}

impl EApp for AppWrapper {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Ok(mut app) = self.app.lock() {
            super::ui::draw_ui(&mut app, ctx, Arc::clone(&self.app));
        } else {
            log::error!("failed to acquire app lock in update");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(name: &str, year: &str, quarter: &str, total_count: u64) -> CombinedRecord {
        CombinedRecord {
            name: name.to_string(),
            year: year.to_string(),
            quarter: quarter.to_string(),
            total_count,
        }
    }

    fn sample_dataset() -> Dataset {
        Dataset {
            combined: vec![record("Rust", "2021", "1", 5)],
            years: vec!["2021".to_string()],
            quarters: vec!["1".to_string()],
            languages: vec!["Rust".to_string()],
        }
    }

    #[test]
    fn test_selection_maps_all_to_empty_criteria() {
        let app = App::default();
        let selection = app.selection();

        assert_eq!(selection.year, "");
        assert_eq!(selection.quarter, "");
        assert_eq!(selection.language, "");
    }

    #[test]
    fn test_selection_keeps_concrete_choices() {
        let mut app = App::default();
        app.selected_year = "2021".to_string();
        app.selected_language = "Rust".to_string();
        app.show_all_quarters = true;
        app.chart_kind = ChartKind::Treemap;

        let selection = app.selection();

        assert_eq!(selection.year, "2021");
        assert_eq!(selection.quarter, "");
        assert_eq!(selection.language, "Rust");
        assert!(selection.show_all_quarters);
        assert_eq!(selection.chart, ChartKind::Treemap);
    }

    #[test]
    fn test_update_with_dataset_schedules_render() {
        let mut app = App::default();
        app.error_message = Some("old failure".to_string());

        app.update_with_dataset(sample_dataset());

        assert!(app.update_needed);
        assert_eq!(app.error_message, None);
        assert_eq!(app.combined.len(), 1);
        assert_eq!(app.languages, vec!["Rust"]);
    }

    #[test]
    fn test_update_with_dataset_resets_stale_selections() {
        let mut app = App::default();
        app.selected_year = "1999".to_string();
        app.selected_language = "Rust".to_string();

        app.update_with_dataset(sample_dataset());

        assert_eq!(app.selected_year, ALL_OPTION);
        // A selection the new data still has is kept
        assert_eq!(app.selected_language, "Rust");
    }
}

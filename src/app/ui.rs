use egui::{ComboBox, Context};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::App;
use crate::data::load_dataset_async;
use crate::types::{ChartKind, ALL_OPTION};

/// Draw the main application UI
pub fn draw_ui(app: &mut App, ctx: &Context, app_arc: Arc<Mutex<App>>) {
    egui::SidePanel::left("side_panel").show(ctx, |ui| {
        ui.heading("Filters");
        ui.separator();

        let mut selection_changed = false;

        selection_changed |= filter_dropdown(
            ui,
            "year_selector",
            "Year:",
            &mut app.selected_year,
            &app.years,
        );
        selection_changed |= filter_dropdown(
            ui,
            "quarter_selector",
            "Quarter:",
            &mut app.selected_quarter,
            &app.quarters,
        );
        selection_changed |= filter_dropdown(
            ui,
            "language_selector",
            "Language:",
            &mut app.selected_language,
            &app.languages,
        );

        ui.separator();
        selection_changed |= ui
            .checkbox(&mut app.show_all_years, "Show all years")
            .changed();
        selection_changed |= ui
            .checkbox(&mut app.show_all_quarters, "By quarter")
            .changed();

        ui.separator();

        // Chart kind buttons
        for kind in ChartKind::ALL {
            if ui.button(kind.label()).clicked() && app.chart_kind != kind {
                app.chart_kind = kind;
                selection_changed = true;
            }
        }

        if selection_changed {
            app.update_needed = true;
        }
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Language Trends");
        ui.separator();

        ui.label("Data directory (issues.csv, prs.csv, repos.csv):");
        ui.text_edit_singleline(&mut app.data_dir);

        if ui.button("Load").clicked() && !app.is_loading {
            spawn_load(app, app_arc.clone());
        }

        if app.is_loading {
            ui.label("Loading... Please wait.");
            ui.spinner();
        }

        if let Some(error) = &app.error_message {
            ui.colored_label(egui::Color32::RED, error);
        }

        ui.separator();
        ui.label(format!("Records: {}", app.combined.len()));
        ui.label(format!("Languages: {}", app.languages.len()));
        ui.label(format!("Years: {}", app.years.len()));
        let total: u64 = app.combined.iter().map(|r| r.total_count).sum();
        ui.label(format!("Total issues + PRs: {}", total));

        ui.separator();
        egui::ScrollArea::vertical().show(ui, |ui| {
            if let Some(texture) = &app.chart_texture {
                ui.image(texture);
            }
        });
    });

    // Re-render the chart if needed
    if app.update_needed {
        if app.combined.is_empty() {
            app.chart_texture = None;
        } else {
            match crate::plotting::generate_chart(app) {
                Ok(bytes) => load_chart_texture(app, ctx, &bytes),
                Err(e) => log::error!("chart rendering failed: {}", e),
            }
        }
        app.update_needed = false;
    }
}

/// A labelled dropdown whose first entry is the `"All"` wildcard. Returns
/// whether the selection changed this frame.
fn filter_dropdown(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    selected: &mut String,
    options: &[String],
) -> bool {
    ui.label(label);
    let previous = selected.clone();
    ComboBox::new(id, "")
        .selected_text(selected.as_str())
        .show_ui(ui, |ui| {
            ui.selectable_value(selected, ALL_OPTION.to_string(), ALL_OPTION);
            for option in options {
                ui.selectable_value(selected, option.clone(), option);
            }
        });
    previous != *selected
}

/// Kick off a background load of the app's data directory.
///
/// The caller already holds the app lock, so progress flags are set through
/// the borrow and the spawned task locks on its own.
pub fn spawn_load(app: &mut App, app_arc: Arc<Mutex<App>>) {
    app.is_loading = true;
    app.error_message = None;
    let data_dir = PathBuf::from(app.data_dir.clone());

    tokio::spawn(async move {
        match load_dataset_async(data_dir).await {
            Ok(dataset) => {
                let mut app = app_arc.lock().unwrap();
                app.update_with_dataset(dataset);
            }
            Err(e) => {
                log::error!("failed to load dashboard data: {}", e);
                let mut app = app_arc.lock().unwrap();
                app.error_message = Some(e.to_string());
            }
        }
        let mut app = app_arc.lock().unwrap();
        app.is_loading = false;
    });
}

fn load_chart_texture(app: &mut App, ctx: &Context, bytes: &[u8]) {
    match image::load_from_memory(bytes) {
        Ok(image) => {
            let size = [image.width() as usize, image.height() as usize];
            let pixels = image.to_rgba8();
            let pixels = pixels.as_flat_samples();
            let texture = ctx.load_texture(
                "chart_texture",
                egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice()),
                egui::TextureOptions::LINEAR,
            );
            app.chart_texture = Some(texture);
        }
        Err(e) => log::error!("failed to decode chart image: {}", e),
    }
}

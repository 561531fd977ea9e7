//! Language Trends Dashboard
//!
//! A GUI application for exploring issue and pull-request activity across
//! programming languages.

use eframe::egui;
use std::sync::{Arc, Mutex};
use tokio::runtime::Runtime;

use langtrends::app::{spawn_load, App, AppWrapper};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Initialize the Tokio runtime
    let rt = Runtime::new()?;
    rt.block_on(async {
        // Initialize the GUI application with larger window size
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1200.0, 800.0])
                .with_min_inner_size([800.0, 600.0])
                .with_title("Language Trends"),
            ..Default::default()
        };

        eframe::run_native(
            "Language Trends",
            options,
            Box::new(|cc| {
                // Configure default fonts and style
                let fonts = egui::FontDefinitions::default();
                cc.egui_ctx.set_fonts(fonts);

                let app: Arc<Mutex<App>> = Arc::new(Mutex::new(App::default()));

                // Load the default data directory on startup
                {
                    let mut state = app.lock().unwrap();
                    spawn_load(&mut state, Arc::clone(&app));
                }

                Ok(Box::new(AppWrapper { app }) as Box<dyn eframe::App>)
            }),
        )
        .map_err(|e| anyhow::anyhow!("error running application: {}", e))
    })
}

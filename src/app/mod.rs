//! Application shell: shared state behind an `Arc<Mutex<_>>` and the egui
//! frame code that drives it.

mod state;
mod ui;

pub use state::{App, AppWrapper};
pub use ui::{draw_ui, spawn_load};

//! # Language Trends Dashboard Library
//!
//! `langtrends` is a library for exploring issue and pull-request activity
//! across programming languages. It loads three CSV tables (issues, pull
//! requests, repositories), joins the issue and pull-request counts per
//! language and quarter, and renders line, bar, pie, and treemap charts
//! driven by year, quarter, and language filters.
//!
//! ## Features
//!
//! - Keyed join of issue and pull-request counts with fail-fast validation
//! - Dropdown options derived from the data itself
//! - Comparison views spanning all years or all quarters
//! - Four chart kinds rendered with `plotters`
//! - Caching of rendered charts
//!
//! ## Example
//!
//! ```no_run
//! use langtrends::LangTrendsApp;
//! use std::sync::{Arc, Mutex};
//! use eframe::NativeOptions;
//!
//! // Create a new application instance
//! let app = Arc::new(Mutex::new(LangTrendsApp::default()));
//! let app_wrapper = langtrends::app::AppWrapper { app };
//!
//! // Run the application with eframe
//! eframe::run_native(
//!     "Language Trends",
//!     NativeOptions::default(),
//!     Box::new(|_cc| Ok(Box::new(app_wrapper))),
//! ).unwrap();
//! ```

pub mod app;
pub mod data;
pub mod plotting;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use app::App as LangTrendsApp;
pub use types::{CombinedRecord, Dataset, FilterSelection};

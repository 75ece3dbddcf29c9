// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use data::{InstrumentSet, LoadOutcome};
pub use models::{DisplayOptions, TraceSpec};
pub use ui::PriceBoardApp;
pub use utils::app_time;

use std::path::PathBuf;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read the instrument document from this file instead of the default path
    #[arg(long)]
    pub data_path: Option<PathBuf>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, data_path: Option<PathBuf>) -> Box<dyn eframe::App> {
    let app = ui::PriceBoardApp::new(cc, data_path);
    Box::new(app)
}

//! DNA Sequence Analysis - desktop front-end
//!
//! Hands a FASTA file to the external analysis executable and shows the result.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;

use app::AnalysisApp;
use dna_analysis_gui::config::Settings;

fn main() -> eframe::Result<()> {
    env_logger::init();
    let settings = Settings::load_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([620.0, 500.0])
            .with_min_inner_size([620.0, 500.0])
            .with_resizable(true)
            .with_title("DNA Sequence Analysis"),
        ..Default::default()
    };

    eframe::run_native(
        "DNA Sequence Analysis",
        native_options,
        Box::new(|cc| Ok(Box::new(AnalysisApp::new(cc, settings)))),
    )
}

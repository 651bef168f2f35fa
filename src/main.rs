//! Textual - a minimal plain-text editor
//!
//! Edit a title and a body, start over, import a text file or export the
//! document as one.

mod app;
mod core;
mod ui;

use app::TextualApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::config::AppConfig;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting Textual...");

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Using default config: {:#}", e);
        AppConfig::default()
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([360.0, 280.0])
            .with_title("Textual"),
        ..Default::default()
    };

    eframe::run_native(
        "Textual",
        native_options,
        Box::new(move |_cc| Ok(Box::new(TextualApp::new(config)))),
    )
}

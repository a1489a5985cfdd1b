// src/main.rs
use anyhow::{anyhow, Context, Result};
use eframe::egui;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod analysis;
mod app;
mod config;
mod file;
mod state;
mod ui;

use app::DashboardApp;
use config::DashboardConfig;
use file::LaunchFileHandler;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let config = DashboardConfig::load().context("Failed to load dashboard configuration")?;
    let dataset = LaunchFileHandler::new()
        .load(&config.data_path)
        .with_context(|| format!("Failed to load launch records from {}", config.data_path.display()))?;

    info!(
        sites = config.site_options.len(),
        slider_step = config.slider_step,
        "starting dashboard"
    );

    let title = config.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(&title),
        ..Default::default()
    };

    let app = DashboardApp::new(config, Arc::new(dataset));
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(app)),
    ).map_err(|e| anyhow!("Failed to run application: {}", e))
}

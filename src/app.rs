// src/app.rs
use chrono::Local;
use eframe::egui;
use rfd::FileDialog;
use std::sync::Arc;
use tracing::{info, warn};

use crate::analysis::{ChartSpec, Dataset};
use crate::config::DashboardConfig;
use crate::file::export::{default_export_dir, default_file_name, export_chart};
use crate::state::{OutputField, ReactiveHost, SubscriptionTable};
use crate::ui::{charts, controls, Layout};

pub struct DashboardApp {
    config: DashboardConfig,
    layout: Layout,
    host: ReactiveHost,
    site_search: String,
    slider_low: f64,
    slider_high: f64,
    error_message: Option<String>,
}

impl DashboardApp {
    pub fn new(config: DashboardConfig, dataset: Arc<Dataset>) -> Self {
        let layout = Layout::build(&dataset, &config);
        let selection = layout.initial_selection();
        let (slider_low, slider_high) = (selection.payload.low(), selection.payload.high());
        let host = ReactiveHost::new(dataset, SubscriptionTable::dashboard(), selection);

        Self {
            config,
            layout,
            host,
            site_search: String::new(),
            slider_low,
            slider_high,
            error_message: None,
        }
    }

    fn show_header(&self, ui: &mut egui::Ui) {
        let title = &self.layout.title;
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(&title.text)
                    .size(title.size)
                    .color(title.color)
                    .strong(),
            );
        });
        ui.add_space(8.0);
    }

    fn show_site_selector(&mut self, ui: &mut egui::Ui) {
        ui.label(&self.layout.site_label);
        let picked = controls::show_site_dropdown(
            ui,
            &self.layout.dropdown,
            &self.host.selection().site,
            &mut self.site_search,
        );

        if let Some(site) = picked {
            info!(site = %site, "site selected");
            self.host.set_site(site);
        }
    }

    fn show_payload_selector(&mut self, ui: &mut egui::Ui) {
        let changed = controls::show_payload_slider(
            ui,
            &self.layout.slider,
            &mut self.slider_low,
            &mut self.slider_high,
        );

        if let Some(range) = changed {
            self.host.set_payload_range(range);
        }
    }

    fn show_figure(&mut self, ui: &mut egui::Ui, output: OutputField) {
        let spec = match output {
            OutputField::SuccessPieChart => &self.layout.pie,
            OutputField::SuccessPayloadScatterChart => &self.layout.scatter,
        };

        match self.host.figure(output) {
            Some(ChartSpec::Pie(pie)) => charts::show_pie_chart(ui, spec, pie),
            Some(ChartSpec::Scatter(scatter)) => charts::show_scatter_chart(ui, spec, scatter),
            None => {
                ui.label(format!("{} has no figure", output.id()));
            }
        }

        if ui.small_button("⬇ Export CSV").clicked() {
            self.export_figure(output);
        }
    }

    fn export_figure(&mut self, output: OutputField) {
        let Some(figure) = self.host.figure(output) else {
            return;
        };

        let mut dialog = FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .add_filter("RON files", &["ron"])
            .set_title("Export Chart Data")
            .set_file_name(default_file_name(&output.file_stem(), Local::now()));

        if let Some(dir) = default_export_dir(&self.config) {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.save_file() {
            if let Err(e) = export_chart(&path, figure) {
                warn!(path = %path.display(), error = %e, "export failed");
                self.error_message = Some(format!("Error exporting chart: {:#}", e));
            }
        }
    }

    fn show_output_container(&self, ui: &mut egui::Ui) {
        let container = &self.layout.output_container;
        ui.push_id(container.id, |ui| {
            if container.wrap {
                ui.horizontal_wrapped(|_ui| {});
            } else {
                ui.horizontal(|_ui| {});
            }
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("dashboard_scroll")
                .show(ui, |ui| {
                    self.show_header(ui);
                    self.show_site_selector(ui);
                    ui.add_space(8.0);

                    self.show_figure(ui, OutputField::SuccessPieChart);
                    ui.add_space(12.0);

                    self.show_payload_selector(ui);
                    ui.add_space(12.0);

                    self.show_figure(ui, OutputField::SuccessPayloadScatterChart);
                    ui.add_space(12.0);

                    self.show_output_container(ui);
                });
        });

        // Show error modal if needed
        let error_msg = self.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }
    }
}

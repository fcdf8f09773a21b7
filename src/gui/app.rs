use std::time::Duration;

use eframe::egui;
use tracing::{
    error,
    info,
};

use super::{
    chart::BarChart,
    controller::{
        HistogramController,
        LoadEvent,
        LoadPhase,
    },
    error_modal::{
        ErrorAction,
        ErrorModal,
    },
    results_table::ResultsTableWidget,
    settings::{
        data::SETTINGS_FILE,
        SettingsData,
    },
};
use crate::{
    core::{
        export::{
            write_csv,
            EXPORT_FILE_NAME,
        },
        http::HttpFetcher,
        WordHistError,
    },
    persistence::save_json,
};

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const SMALL_SPACING: f32 = 4.0;
const MEDIUM_SPACING: f32 = 8.0;

pub struct WordHistApp {
    settings_data: SettingsData,
    controller: HistogramController,
    error_modal: ErrorModal,
    export_message: Option<String>,
}

impl WordHistApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings_data: SettingsData,
    ) -> Result<Self, WordHistError> {
        let fetcher = HttpFetcher::new(settings_data.request_timeout())?;
        let controller = HistogramController::new(fetcher)?;

        cc.egui_ctx.set_theme(if settings_data.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        Ok(Self { settings_data, controller, error_modal: ErrorModal::default(), export_message: None })
    }

    fn submit(&mut self) {
        self.export_message = None;
        let url = self.settings_data.source_url.clone();
        self.controller.load(&url);
    }

    fn export(&mut self) {
        let Some(csv) = self.controller.export_current() else {
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .set_file_name(EXPORT_FILE_NAME)
            .add_filter("CSV (text/csv)", &["csv"])
            .save_file()
        else {
            return;
        };

        match write_csv(&path, &csv) {
            Ok(()) => {
                info!("Exported histogram to {}", path.display());
                self.export_message = Some(format!("✓ Saved {}", path.display()));
            }
            Err(e) => {
                error!("Failed to export histogram to {}: {}", path.display(), e);
                self.error_modal.show_error(
                    "Export Error",
                    format!("Unable to write {}", path.display()),
                    Some(e.to_string()),
                    false,
                );
            }
        }
    }

    fn handle_load_event(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Loaded { .. } => {}
            LoadEvent::Failed { url, error, retryable } => {
                let (title, message) = if retryable {
                    ("Retrieval Error", format!("Unable to fetch {}", url))
                } else {
                    ("Load Error", format!("Loading {} failed", url))
                };
                self.error_modal.show_error(title, message, Some(error), retryable);
            }
        }
    }

    fn sync_theme(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.theme() == egui::Theme::Dark;
        if dark_mode != self.settings_data.dark_mode {
            self.settings_data.dark_mode = dark_mode;
            self.save_settings();
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            error!("Failed to save settings: {}", e);
        }
    }

    fn ui_top_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }

    fn ui_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let loading = self.controller.is_loading();
            if ui.add_enabled(!loading, egui::Button::new("Submit")).clicked() {
                self.submit();
            }
            if loading {
                ui.spinner();
                ui.label("Fetching document...");
            } else {
                ui.weak(&self.settings_data.source_url);
            }
        });
    }

    fn ui_results(&mut self, ui: &mut egui::Ui) {
        let Some(analysis) = self.controller.analysis() else {
            if self.controller.phase() == LoadPhase::Idle {
                ui.weak("Press Submit to fetch the document and count its words.");
            }
            return;
        };

        ui.label(format!(
            "Total: {} words | Unique: {} words | Showing top {}",
            analysis.total_tokens,
            analysis.unique_words,
            analysis.top_list.len()
        ));
        ui.add_space(MEDIUM_SPACING);

        ui.horizontal_top(|ui| {
            BarChart::show(ui, &analysis.top_list);
            ui.add_space(MEDIUM_SPACING);
            ui.vertical(|ui| {
                ResultsTableWidget::show(ui, &analysis.top_list);
            });
        });

        ui.add_space(MEDIUM_SPACING);

        // An empty list keeps the "No words found" notice but offers no export.
        let mut export_clicked = false;
        ui.horizontal(|ui| {
            if self.controller.can_export() && ui.button("Export").clicked() {
                export_clicked = true;
            }
            if let Some(msg) = &self.export_message {
                ui.colored_label(egui::Color32::from_rgb(0, 200, 0), msg);
            }
        });

        if export_clicked {
            self.export();
        }
    }
}

impl eframe::App for WordHistApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for event in self.controller.poll() {
            self.handle_load_event(event);
        }

        if self.controller.is_loading() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }

        self.sync_theme(ctx);
        self.ui_top_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Word Histogram");
            ui.add_space(SMALL_SPACING);
            self.ui_controls(ui);
            ui.add_space(MEDIUM_SPACING);
            ui.separator();
            ui.add_space(SMALL_SPACING);
            self.ui_results(ui);
        });

        if let Some(ErrorAction::Retry) = self.error_modal.show(ctx) {
            self.submit();
        }
    }
}

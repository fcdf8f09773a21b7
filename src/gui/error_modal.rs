use eframe::egui;

const MODAL_WIDTH: f32 = 420.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorAction {
    Dismiss,
    Retry,
}

#[derive(Default, Clone)]
struct ErrorData {
    title: String,
    message: String,
    details: Option<String>,
    retryable: bool,
}

/// Modal for failures the user should see, e.g. a document that could not be fetched.
#[derive(Default)]
pub struct ErrorModal {
    open: bool,
    data: ErrorData,
}

impl ErrorModal {
    pub fn show_error(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        details: Option<impl Into<String>>,
        retryable: bool,
    ) {
        self.data = ErrorData {
            title: title.into(),
            message: message.into(),
            details: details.map(|d| d.into()),
            retryable,
        };

        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<ErrorAction> {
        if !self.open {
            return None;
        }

        let mut action = None;

        let modal = egui::Modal::new(egui::Id::new("error_modal")).show(ctx, |ui| {
            ui.set_width(MODAL_WIDTH);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(22.0).color(egui::Color32::RED));
                ui.label(egui::RichText::new(&self.data.title).size(17.0).strong());
            });

            ui.add_space(8.0);
            ui.label(&self.data.message);

            if let Some(details) = &self.data.details {
                ui.add_space(8.0);
                ui.collapsing("Details", |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut details.as_str())
                            .desired_width(f32::INFINITY)
                            .desired_rows(3)
                            .code_editor(),
                    );
                });
            }

            ui.add_space(12.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    action = Some(ErrorAction::Dismiss);
                    ui.close();
                }
                if self.data.retryable && ui.button("Retry").clicked() {
                    action = Some(ErrorAction::Retry);
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
            self.data = ErrorData::default();
            return Some(action.unwrap_or(ErrorAction::Dismiss));
        }

        None
    }
}

use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::core::TopList;

const RESULTS_TABLE_HEIGHT: f32 = 400.0;
const TABLE_RANK_COLUMN_WIDTH: f32 = 30.0;
const TABLE_WORD_COLUMN_WIDTH: f32 = 120.0;
const TABLE_COUNT_COLUMN_WIDTH: f32 = 60.0;
const TABLE_HEADER_HEIGHT: f32 = 20.0;
const TABLE_ROW_HEIGHT: f32 = 18.0;

pub struct ResultsTableWidget;

impl ResultsTableWidget {
    pub fn show(ui: &mut egui::Ui, top_list: &TopList) {
        egui::ScrollArea::vertical().max_height(RESULTS_TABLE_HEIGHT).show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::initial(TABLE_RANK_COLUMN_WIDTH))
                .column(Column::initial(TABLE_WORD_COLUMN_WIDTH).resizable(true))
                .column(Column::initial(TABLE_COUNT_COLUMN_WIDTH).resizable(true))
                .header(TABLE_HEADER_HEIGHT, |mut header| {
                    header.col(|ui| {
                        ui.strong("#");
                    });
                    header.col(|ui| {
                        ui.strong("Word");
                    });
                    header.col(|ui| {
                        ui.strong("Count");
                    });
                })
                .body(|mut body| {
                    for (index, entry) in top_list.entries().iter().enumerate() {
                        body.row(TABLE_ROW_HEIGHT, |mut row| {
                            row.col(|ui| {
                                ui.weak((index + 1).to_string());
                            });
                            row.col(|ui| {
                                ui.label(&entry.word);
                            });
                            row.col(|ui| {
                                ui.label(entry.count.to_string());
                            });
                        });
                    }
                });
        });
    }
}

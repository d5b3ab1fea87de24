// src/gui/components/table.rs
//
// Flat table of the ladder, same columns as the CSV export.

use eframe::egui;
use egui_extras::{ Column, TableBuilder };
use crate::csv::{ ladder_row, HEADERS };
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let profile_col = HEADERS.len() - 1;

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().resizable(true), profile_col)
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| { ui.strong(h); });
            }
        })
        .body(|mut body| {
            for (i, entry) in app.ladder.iter().enumerate() {
                let cells = ladder_row(i + 1, entry);
                body.row(18.0, |mut row| {
                    for (ci, cell) in cells.iter().enumerate() {
                        row.col(|ui| {
                            if ci == profile_col {
                                ui.hyperlink_to("op.gg", cell);
                            } else {
                                ui.label(cell);
                            }
                        });
                    }
                });
            }
        });
}

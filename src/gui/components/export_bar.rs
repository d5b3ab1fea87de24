// src/gui/components/export_bar.rs

use eframe::egui::{ self, widgets::Spinner };
use crate::{
    config::options::ExportFormat,
    gui::{ actions, app::App },
};

const FORMATS: &[(ExportFormat, &str)] = &[
    (ExportFormat::Html, "HTML"),
    (ExportFormat::Csv, "CSV"),
    (ExportFormat::Tsv, "TSV"),
];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            for &(f, label) in FORMATS {
                ui.selectable_value(&mut fmt, f, label);
            }

            let headers_apply = fmt.delim().is_some();
            let before_headers = export.include_headers;
            ui.add_enabled(headers_apply, egui::Checkbox::new(&mut export.include_headers, "Include headers"));
            if export.include_headers != before_headers {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
        });

        if fmt != prev_fmt {
            export.set_format(fmt);
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions: Export / Refresh ---
    ui.horizontal(|ui| {
        let can_export = !app.busy() && !app.ladder.is_empty();
        if ui.add_enabled(can_export, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }

        let gold = egui::Color32::from_rgb(255, 215, 0);
        let button_refresh = ui.add_enabled(
            !app.busy(),
            egui::Button::new(
                egui::RichText::new("REFRESH")
                .color(egui::Color32::BLACK)
                .strong())
            .fill(gold));

        if button_refresh.clicked() {
            app.request_refresh();
        }

        if app.busy() {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status_text());
    });
}

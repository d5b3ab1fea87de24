// src/gui/components/tabs.rs
//
// Top tabs: switch between the card view and the table view.

use eframe::egui;
use crate::config::state::View;
use crate::gui::app::App;

const TABS: &[(View, &str)] = &[
    (View::Cards, "Classement"),
    (View::Table, "Table"),
];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for &(view, title) in TABS {
            let selected = app.state.gui.view == view;
            if ui.selectable_label(selected, title).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", app.state.gui.view, view);
                app.state.gui.view = view;
            }
        }
    });
}

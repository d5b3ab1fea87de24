// src/gui/components/cards.rs
//
// One colored card per ladder entry, podium first. Purely a view.

use eframe::egui::{ self, Color32, CornerRadius, Margin, RichText };
use crate::gui::app::App;
use crate::render::{ entries, Entry };

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.ladder.is_empty() {
        ui.label(if app.busy() { "Fetching…" } else { "No accounts loaded. Press REFRESH." });
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("ladder_cards")
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            for e in entries(&app.ladder) {
                card(ui, &e);
            }
        });
}

fn card(ui: &mut egui::Ui, e: &Entry<'_>) {
    let fill = Color32::from_hex(e.color).unwrap_or(Color32::DARK_GRAY);
    // Dark text on the podium colors, light text on the rest.
    let fg = if e.podium { Color32::BLACK } else { Color32::WHITE };

    egui::Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::symmetric(0, 5))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("{} {}", e.medal, e.display_name)).heading().strong().color(fg));
                ui.hyperlink_to(RichText::new("(op.gg)").small().color(fg), e.profile_url);
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new(e.rank_label).strong().color(fg));
                ui.label(RichText::new(format!("{}  |  {}W / {}L", e.points_label, e.wins, e.losses)).color(fg));
            });
            ui.label(RichText::new(e.team.name).small().color(fg));
        });
}

// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{ IconData, ViewportBuilder };
use image::{ Rgba, RgbaImage };
use lol_ladder::{ config::state::GuiState, gui };

const ICON_SIZE: u32 = 64;

/// Gold disc on a transparent background.
fn app_icon() -> IconData {
    let c = (ICON_SIZE as f32 - 1.0) / 2.0;
    let r = ICON_SIZE as f32 / 2.0 - 2.0;
    let rgba = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let d = ((x as f32 - c).powi(2) + (y as f32 - c).powi(2)).sqrt();
        if d <= r - 6.0 {
            Rgba([255, 215, 0, 255])
        } else if d <= r {
            Rgba([205, 127, 50, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    let size = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([size.window_w as f32, size.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}

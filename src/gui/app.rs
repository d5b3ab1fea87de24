// src/gui/app.rs
use std::{
    error::Error,
    sync::{ Arc, Mutex },
};

use eframe::egui;

use crate::{
    config::{ consts::PAGE_TITLE, state::{ AppState, View } },
    data::ScoredRecord,
};

use super::{ actions, components };

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        PAGE_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// Refresh is deferred by one frame so "Fetching…" is painted first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Refresh {
    Idle,
    Requested,
    Painted,
}

pub struct App {
    pub state: AppState,

    // current ladder, best first
    pub ladder: Vec<ScoredRecord>,

    // output text field UX (mapped onto ExportOptions on export)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: Arc<Mutex<String>>,
    pub refresh: Refresh,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();
        logf!("Init: view={:?} out={}", state.gui.view, out_path_text);

        let mut app = Self {
            state,
            ladder: Vec::new(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
            refresh: Refresh::Idle,
        };
        // Load the ladder as soon as the window is up.
        app.request_refresh();
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn request_refresh(&mut self) {
        if self.refresh == Refresh::Idle {
            self.refresh = Refresh::Requested;
            self.status("Fetching…");
        }
    }

    #[inline]
    pub fn busy(&self) -> bool {
        self.refresh != Refresh::Idle
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("actions").show(ctx, |ui| {
            components::export_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);
            ui.separator();

            match self.state.gui.view {
                View::Cards => components::cards::draw(ui, self),
                View::Table => components::table::draw(ui, self),
            }
        });

        match self.refresh {
            Refresh::Idle => {}
            Refresh::Requested => {
                self.refresh = Refresh::Painted;
                ctx.request_repaint();
            }
            Refresh::Painted => {
                actions::refresh(self);
                self.refresh = Refresh::Idle;
            }
        }
    }
}

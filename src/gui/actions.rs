// src/gui/actions.rs
//
// Button handlers. Both run on the UI thread; the window is unresponsive
// while accounts are being fetched.

use crate::{
    config::consts::ACCOUNTS,
    core::HttpFetcher,
    file,
    gui::{ app::App, progress::GuiProgress },
    scrape,
};

pub fn refresh(app: &mut App) {
    logf!("UI: Refresh accounts={}", ACCOUNTS.len());

    let fetcher = match HttpFetcher::new() {
        Ok(f) => f,
        Err(e) => {
            loge!("UI: HTTP client init failed: {e}");
            app.status(format!("Error: {e}"));
            return;
        }
    };

    let mut prog = GuiProgress::new(app.status.clone());
    app.ladder = scrape::run(ACCOUNTS, &fetcher, Some(&mut prog));
}

pub fn export(app: &mut App) {
    if app.out_path_dirty {
        let text = app.out_path_text.clone();
        app.state.options.export.set_path(&text);
        app.out_path_dirty = false;
    }

    match file::export_leaderboard(&app.state.options.export, &app.ladder) {
        Ok(path) => app.status(format!("Wrote {}", path.display())),
        Err(e) => {
            loge!("UI: Export failed: {e}");
            app.status(format!("Export failed: {e}"));
        }
    }
}

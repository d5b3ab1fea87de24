// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Cards,
    Table,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab
    pub view: View,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 720,
            window_h: 640,
            view: View::Cards,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

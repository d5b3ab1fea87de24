// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, failed: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        self.set_status(format!("Fetched {} ({}/{})", label, self.done + self.failed, self.total));
    }
    fn item_failed(&mut self, label: &str) {
        self.failed += 1;
        self.set_status(format!("Failed {} ({}/{})", label, self.done + self.failed, self.total));
    }
    fn finish(&mut self) {
        match self.failed {
            0 => self.set_status(format!("Fetch complete ({}/{})", self.done, self.total)),
            n => self.set_status(format!(
                "Fetch complete ({}/{}), {} failed and shown as Unranked",
                self.done, self.total, n
            )),
        }
    }
}

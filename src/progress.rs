// src/progress.rs
/// Lightweight progress reporting for the fetch loop.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of accounts.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One account fetched and parsed.
    fn item_done(&mut self, _label: &str) {}

    /// One account could not be fetched; it was recorded as Unranked.
    fn item_failed(&mut self, _label: &str) {}

    /// Called at the end.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

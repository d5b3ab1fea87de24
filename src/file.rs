// src/file.rs
use std::{
    error::Error,
    fs,
    io,
    path::{ Path, PathBuf },
};

use crate::config::options::{ ExportFormat, ExportOptions };
use crate::data::ScoredRecord;
use crate::{ csv, render };

/// Create a directory (and parents) if missing. Error if a non-dir exists there.
pub fn ensure_directory(p: &Path) -> io::Result<()> {
    if p.as_os_str().is_empty() {
        return Ok(());
    }
    if p.exists() {
        if p.is_dir() {
            return Ok(());
        }
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists and is not a directory: {}", p.display()),
        ));
    }
    fs::create_dir_all(p)
}

/// The ladder in the configured format.
pub fn export_string(opts: &ExportOptions, ladder: &[ScoredRecord]) -> Result<String, Box<dyn Error>> {
    match opts.format.delim() {
        Some(sep) => Ok(csv::to_export_string(ladder, opts.include_headers, sep)),
        None => render::to_html(ladder),
    }
}

/// Write the ladder to `opts.out_path()`, creating parent directories.
/// Returns the path written.
pub fn export_leaderboard(opts: &ExportOptions, ladder: &[ScoredRecord]) -> Result<PathBuf, Box<dyn Error>> {
    let path = opts.out_path();
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }

    let text = export_string(opts, ladder)?;
    fs::write(&path, text)?;

    logf!(
        "Export: {} entries as {:?} → {}",
        ladder.len(),
        opts.format,
        path.display()
    );
    if opts.format == ExportFormat::Html {
        logd!("Export: open {} in a browser to view", path.display());
    }
    Ok(path)
}

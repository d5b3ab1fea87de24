// src/config/options.rs
use std::borrow::Cow;
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub export: ExportOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Csv  => "csv",
            ExportFormat::Tsv  => "tsv",
        }
    }

    /// Field separator for the delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Html => None,
            ExportFormat::Csv  => Some(','),
            ExportFormat::Tsv  => Some('\t'),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Some(ExportFormat::Html),
            "csv"  => Some(ExportFormat::Csv),
            "tsv"  => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Html,
            out_path: OutputPath::default(),
            include_headers: false,
        }
    }
}

impl ExportOptions {
    /// Full output path. The extension follows the format unless the user typed one.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        let ext = match &self.out_path.user_ext {
            Some(ext) => ext.to_string_lossy(),
            None => Cow::Borrowed(self.format.ext()),
        };
        path.push(join!(&*stem, ".", &*ext));
        path
    }

    /// Parse a typed path into dir + stem (+ extension, if given).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.user_ext = p.extension().map(|e| e.to_os_string());
    }

    pub fn set_format(&mut self, fmt: ExportFormat) {
        self.format = fmt;
    }

    pub fn is_default_path(&self) -> bool {
        self.out_path == OutputPath::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,        // without extension
    user_ext: Option<OsString>, // typed by the user; overrides format
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            user_ext: None,
        }
    }
}

//! Shared helpers for the integration tests.
//!
//! PDFs are generated on the fly; the page width of every fixture identifies
//! the document it came from, so page order can be checked after a merge.

use chrono::{DateTime, Local, TimeZone};
use lopdf::Document;
use pdf_merger::config::Config;
use pdf_merger::io::blank_document;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch working area with `input/`, `output/` and a log file.
pub struct Workspace {
    dir: TempDir,
    pub config: Config,
}

impl Workspace {
    /// Create the workspace; `input/` exists, `output/` does not yet.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Config {
            log_file: dir.path().join("pdf_merger_debug.log"),
            ..Config::with_dirs(dir.path().join("input"), dir.path().join("output"))
        };
        fs::create_dir_all(&config.input_dir).expect("Failed to create input dir");
        Self { dir, config }
    }

    /// Root of the workspace.
    #[allow(dead_code)]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a PDF with `pages` pages of the given width into `input/`.
    pub fn add_pdf(&self, name: &str, pages: u32, width: f32) -> PathBuf {
        let path = self.config.input_dir.join(name);
        write_pdf(&path, pages, width);
        path
    }

    /// Write raw bytes into `input/`.
    pub fn add_file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.config.input_dir.join(name);
        fs::write(&path, contents).expect("Failed to write input file");
        path
    }

    /// Names of the entries in `output/`, sorted.
    pub fn output_entries(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.config.output_dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Write a PDF with `pages` A4-high pages of the given width.
pub fn write_pdf(path: &Path, pages: u32, width: f32) {
    let mut doc = blank_document(pages, [width, 842.0]);
    doc.save(path).expect("Failed to save fixture");
}

/// Widths of every page of the PDF at `path`, in page order.
pub fn page_widths(path: &Path) -> Vec<f32> {
    let doc = Document::load(path).expect("Failed to load merged PDF");
    doc.get_pages()
        .into_values()
        .map(|page_id| {
            let page = doc.get_dictionary(page_id).unwrap();
            let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
            media_box[2].as_float().unwrap()
        })
        .collect()
}

/// Fixed run start time.
pub fn started_at(second: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 3, 14, 15, 9, second).unwrap()
}

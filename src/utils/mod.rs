//! Utilities for candidate collection, directory listings and size formatting.

use crate::{Result, error::PdfMergerError};
use serde::Serializer;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use walkdir::WalkDir;

/// Extension (without dot) of candidate documents.
pub const PDF_EXTENSION: &str = "pdf";

/// Collect `*.pdf` entries directly inside `dir`.
///
/// The match is case-sensitive and non-recursive. Entries come back sorted
/// by path. A `dir` that is not valid UTF-8 cannot be expressed as a glob
/// pattern and is scanned with [`std::fs::read_dir`] instead.
///
/// Errors:
/// - [`PdfMergerError::DirectoryNotReadable`] if `dir` or one of its entries
///   cannot be read.
pub fn collect_pdf_candidates(dir: &Path) -> Result<Vec<PathBuf>> {
    let Some(dir_str) = dir.to_str() else {
        return scan_pdf_candidates(dir);
    };

    let pattern = format!("{}/*.{PDF_EXTENSION}", glob::Pattern::escape(dir_str));
    let paths = glob::glob(&pattern)
        .map_err(|err| PdfMergerError::invalid_config(format!("{pattern}: {err}")))?;

    let mut candidates = Vec::new();
    for entry in paths {
        let path = entry.map_err(|err| PdfMergerError::DirectoryNotReadable {
            path: err.path().to_path_buf(),
            source: err.into_error(),
        })?;
        candidates.push(path);
    }

    Ok(candidates)
}

fn scan_pdf_candidates(dir: &Path) -> Result<Vec<PathBuf>> {
    let unreadable = |source| PdfMergerError::DirectoryNotReadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();
        if path.extension().is_some_and(|ext| ext == PDF_EXTENSION) {
            candidates.push(path);
        }
    }
    candidates.sort();

    Ok(candidates)
}

/// Names of all entries directly inside `dir`, sorted by name.
///
/// Unreadable entries are skipped; this listing only feeds diagnostics.
pub fn list_directory(dir: &Path) -> Vec<String> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect()
}

/// Final path component as a displayable string.
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Format file size as human-readable string.
///
/// # Returns
///
/// Formatted string like "1.50 MB" or "234 bytes"
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}

/// Seconds rounded to two decimals, the precision merge times are reported with.
pub fn rounded_secs(duration: Duration) -> f64 {
    (duration.as_secs_f64() * 100.0).round() / 100.0
}

/// Serialize a [`Duration`] as fractional seconds.
pub fn serialize_secs<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(rounded_secs(*duration))
}

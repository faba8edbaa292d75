//! Input validation for pdf-merger.
//!
//! This module checks both locations before any document is touched and
//! decides, one candidate at a time, whether a file may take part in the merge:
//! - Directory creation and read/write permission checks
//! - File existence and readability checks
//! - Non-empty size check
//! - PDF parse and page count checks
//!
//! # Examples
//!
//! ```no_run
//! use pdf_merger::validation::{Validator, validate_directories};
//! use std::path::Path;
//!
//! # fn example() -> pdf_merger::Result<()> {
//! validate_directories(Path::new("input"), Path::new("output"))?;
//!
//! let validator = Validator::new();
//! let handle = validator.validate_file(Path::new("input/a.pdf"))?;
//! println!("{} has {} pages", handle.file_name, handle.page_count);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::error::{PdfMergerError, Result};
use crate::io::PdfReader;
use crate::utils::{file_name_of, format_file_size};

/// Name of the file created and removed to prove the output is writable.
const WRITE_PROBE_NAME: &str = ".pdf_merger_write_probe";

/// A source document that passed every validation predicate.
///
/// Created during discovery, read during the merge, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHandle {
    /// Path to the document.
    pub path: PathBuf,

    /// Final path component, used for ordering and reporting.
    pub file_name: String,

    /// Size of the file in bytes.
    pub file_size: u64,

    /// Number of pages found when the document was validated.
    pub page_count: usize,

    /// PDF version string from the header.
    pub version: String,

    /// Number of objects in the PDF.
    pub object_count: usize,

    /// First page dimensions (width, height) in points, if available.
    pub page_dimensions: Option<(f32, f32)>,
}

impl DocumentHandle {
    fn from_document(path: &Path, file_size: u64, doc: &Document) -> Self {
        let pages = doc.get_pages();

        let page_dimensions = pages.values().next().and_then(|page_id| {
            let media_box = doc
                .get_dictionary(*page_id)
                .ok()?
                .get(b"MediaBox")
                .ok()?
                .as_array()
                .ok()?;
            match media_box.as_slice() {
                [_, _, width, height, ..] => {
                    Some((width.as_float().ok()?, height.as_float().ok()?))
                }
                _ => None,
            }
        });

        Self {
            path: path.to_path_buf(),
            file_name: file_name_of(path),
            file_size,
            page_count: pages.len(),
            version: doc.version.clone(),
            object_count: doc.objects.len(),
            page_dimensions,
        }
    }

    /// Format the file size as a human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// Validator for candidate documents.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    reader: PdfReader,

    /// Log version, page size and object count of each accepted document.
    verbose: bool,
}

impl Validator {
    /// Create a new validator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator that logs per-document details.
    pub fn verbose() -> Self {
        Self {
            verbose: true,
            ..Default::default()
        }
    }

    /// Validate a single candidate.
    ///
    /// Predicates run in order and stop at the first failure:
    /// existence, read permission, non-zero size, successful parse, at least
    /// one page. Validating the same unchanged file twice gives the same
    /// decision and page count.
    ///
    /// # Errors
    ///
    /// Returns the recoverable error describing the first failed predicate.
    pub fn validate_file(&self, path: &Path) -> Result<DocumentHandle> {
        debug!("Validating file: {}", file_name_of(path));

        let exists = path
            .try_exists()
            .map_err(|e| PdfMergerError::FileNotReadable {
                path: path.to_path_buf(),
                source: e,
            })?;
        if !exists {
            return Err(PdfMergerError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        if !path.is_file() {
            return Err(PdfMergerError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        File::open(path).map_err(|e| PdfMergerError::FileNotReadable {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file_size = fs::metadata(path)
            .map_err(|e| PdfMergerError::FileNotReadable {
                path: path.to_path_buf(),
                source: e,
            })?
            .len();
        debug!(
            "File size: {file_size} bytes ({})",
            format_file_size(file_size)
        );

        if file_size == 0 {
            return Err(PdfMergerError::EmptyFile {
                path: path.to_path_buf(),
            });
        }

        let loaded = self.reader.load(path)?;
        debug!("PDF pages: {}", loaded.page_count);

        if loaded.page_count == 0 {
            return Err(PdfMergerError::NoPages {
                path: path.to_path_buf(),
            });
        }

        let handle = DocumentHandle::from_document(path, file_size, &loaded.document);

        if self.verbose {
            Self::log_document_details(&handle);
        }

        debug!("File validated: {}", handle.file_name);
        Ok(handle)
    }

    fn log_document_details(handle: &DocumentHandle) {
        debug!("  Version: {}", handle.version);
        if let Some((width, height)) = handle.page_dimensions {
            debug!("  Page size: {width:.1} x {height:.1} pts");
        }
        debug!("  Objects: {}", handle.object_count);
    }
}

/// Ensure both locations exist and are usable.
///
/// Missing directories are created together with their parents. The input
/// must be listable and the output must accept a new file. Nothing is rolled
/// back when a later check fails.
///
/// # Errors
///
/// Returns a fatal directory error for the first location that fails.
pub fn validate_directories(input_dir: &Path, output_dir: &Path) -> Result<()> {
    info!("Validating directories...");
    debug!("Input directory path: {}", absolute_display(input_dir));
    debug!("Output directory path: {}", absolute_display(output_dir));

    for directory in [input_dir, output_dir] {
        ensure_directory(directory)?;
    }

    check_readable(input_dir).inspect_err(|e| error!("{e}"))?;
    check_writable(output_dir).inspect_err(|e| error!("{e}"))?;

    info!("Directory validation completed successfully");
    Ok(())
}

/// Create `directory` (and parents) if it is absent.
pub fn ensure_directory(directory: &Path) -> Result<()> {
    if directory.exists() {
        if !directory.is_dir() {
            let err = PdfMergerError::NotADirectory {
                path: directory.to_path_buf(),
            };
            error!("{err}");
            return Err(err);
        }
        debug!("Directory exists: {}", directory.display());
        return Ok(());
    }

    info!("Creating directory: {}", directory.display());
    fs::create_dir_all(directory).map_err(|e| {
        let err = PdfMergerError::FailedToCreateDirectory {
            path: directory.to_path_buf(),
            source: e,
        };
        error!("{err}");
        err
    })?;
    info!("Directory created successfully: {}", directory.display());

    Ok(())
}

fn check_readable(directory: &Path) -> Result<()> {
    fs::read_dir(directory).map_err(|e| PdfMergerError::DirectoryNotReadable {
        path: directory.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

fn check_writable(directory: &Path) -> Result<()> {
    let probe = directory.join(WRITE_PROBE_NAME);
    let not_writable = |e| PdfMergerError::DirectoryNotWritable {
        path: directory.to_path_buf(),
        source: e,
    };

    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&probe)
        .map_err(not_writable)?;
    fs::remove_file(&probe).map_err(not_writable)?;

    Ok(())
}

pub(crate) fn absolute_display(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

//! PDF reading and loading operations.
//!
//! # Examples
//!
//! ```no_run
//! use pdf_merger::io::PdfReader;
//! use std::path::Path;
//!
//! # fn example() -> pdf_merger::Result<()> {
//! let reader = PdfReader::new();
//! let loaded = reader.load(Path::new("input/a.pdf"))?;
//! println!("{} pages", loaded.page_count);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfMergerError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to load the document.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

/// Opens documents through the codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new reader.
    pub fn new() -> Self {
        Self
    }

    /// Open the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PdfMergerError::FailedToLoadPdf`] when the codec rejects the
    /// file, [`PdfMergerError::EncryptedPdf`] for encrypted documents and
    /// [`PdfMergerError::FileNotReadable`] when the size cannot be read.
    pub fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let start = Instant::now();

        let document = Document::load(path).map_err(|e| {
            let reason = e.to_string();
            if reason.contains("encrypt") || reason.contains("password") {
                PdfMergerError::EncryptedPdf {
                    path: path.to_path_buf(),
                }
            } else {
                PdfMergerError::failed_to_load_pdf(path.to_path_buf(), reason)
            }
        })?;

        if document.is_encrypted() {
            return Err(PdfMergerError::EncryptedPdf {
                path: path.to_path_buf(),
            });
        }

        let file_size = std::fs::metadata(path)
            .map_err(|e| PdfMergerError::FileNotReadable {
                path: path.to_path_buf(),
                source: e,
            })?
            .len();

        let page_count = document.get_pages().len();

        Ok(LoadedPdf {
            document,
            path: path.to_path_buf(),
            page_count,
            load_time: start.elapsed(),
            file_size,
        })
    }
}

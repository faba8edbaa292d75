//! PDF writing and saving operations.
//!
//! Output is first written to a temporary sibling (`<name>.part`) and renamed
//! onto the destination once complete, so a failed write never leaves a
//! truncated file under the destination name.
//!
//! # Examples
//!
//! ```no_run
//! use pdf_merger::io::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # fn example(mut doc: Document) -> pdf_merger::Result<()> {
//! let writer = PdfWriter::new();
//! writer.save(&mut doc, Path::new("output/merged.pdf"))?;
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfMergerError, Result};
use crate::utils::format_file_size;

/// Suffix appended to the destination name while a write is in flight.
pub const PARTIAL_SUFFIX: &str = ".part";

/// Capacity of the buffered writer used for serialization.
const BUFFER_SIZE: usize = 8192;

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// Writes merged documents and single-file copies through a `.part` file.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfWriter;

impl PdfWriter {
    /// Create a new PDF writer.
    pub fn new() -> Self {
        Self
    }

    /// Serialize `doc` to `path` in a single buffered write.
    ///
    /// # Errors
    ///
    /// Returns [`PdfMergerError::FailedToCreateOutput`] if the file cannot be
    /// created and [`PdfMergerError::FailedToWrite`] if serialization, flush or
    /// the final rename fails. The temporary file is removed on failure.
    pub fn save(&self, doc: &mut Document, path: &Path) -> Result<WriteStatistics> {
        let start = Instant::now();

        doc.compress();

        let write_path = Self::write_path(path);

        let written =
            Self::write_document(doc, &write_path).and_then(|()| Self::finish(&write_path, path));

        if let Err(err) = written {
            Self::discard(&write_path);
            return Err(err);
        }

        let file_size = fs::metadata(path)
            .map_err(|e| PdfMergerError::FailedToWrite {
                path: path.to_path_buf(),
                source: e,
            })?
            .len();

        Ok(WriteStatistics {
            write_time: start.elapsed(),
            file_size,
            output_path: path.to_path_buf(),
        })
    }

    /// Copy `source` byte for byte to `destination`.
    ///
    /// The source modification time is carried over.
    ///
    /// # Errors
    ///
    /// Returns [`PdfMergerError::FailedToCopy`] if reading, writing or the
    /// final rename fails.
    pub fn copy_file(&self, source: &Path, destination: &Path) -> Result<WriteStatistics> {
        let start = Instant::now();
        let write_path = Self::write_path(destination);

        let copied = Self::copy_preserving_mtime(source, &write_path)
            .and_then(|()| fs::rename(&write_path, destination));

        if let Err(e) = copied {
            Self::discard(&write_path);
            return Err(PdfMergerError::FailedToCopy {
                from: source.to_path_buf(),
                to: destination.to_path_buf(),
                source: e,
            });
        }

        let file_size = fs::metadata(destination)?.len();

        Ok(WriteStatistics {
            write_time: start.elapsed(),
            file_size,
            output_path: destination.to_path_buf(),
        })
    }

    /// Path written before the rename onto `destination`.
    pub fn write_path(destination: &Path) -> PathBuf {
        let mut name = destination
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(PARTIAL_SUFFIX);
        destination.with_file_name(name)
    }

    fn write_document(doc: &mut Document, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| PdfMergerError::FailedToCreateOutput {
            path: path.to_path_buf(),
            source: e,
        })?;

        // The handle is closed when `writer` drops, on every exit path.
        let mut writer = BufWriter::with_capacity(BUFFER_SIZE, file);

        doc.save_to(&mut writer)
            .map_err(|e| PdfMergerError::FailedToWrite {
                path: path.to_path_buf(),
                source: std::io::Error::other(e),
            })?;

        writer.flush().map_err(|e| PdfMergerError::FailedToWrite {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    fn copy_preserving_mtime(source: &Path, destination: &Path) -> std::io::Result<()> {
        fs::copy(source, destination)?;

        // The copy inherits the source permissions; a read-only handle can still set times.
        let modified = fs::metadata(source)?.modified()?;
        File::open(destination)?.set_modified(modified)?;

        Ok(())
    }

    fn finish(write_path: &Path, destination: &Path) -> Result<()> {
        fs::rename(write_path, destination).map_err(|e| PdfMergerError::FailedToWrite {
            path: destination.to_path_buf(),
            source: e,
        })
    }

    fn discard(write_path: &Path) {
        // Best effort; the write error is what gets reported.
        let _ = fs::remove_file(write_path);
    }
}

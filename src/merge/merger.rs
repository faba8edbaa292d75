use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info};

use crate::error::{PdfMergerError, Result};
use crate::io::{PdfReader, PdfWriter, WriteStatistics};
use crate::merge::accumulator::PageAccumulator;
use crate::merge::result::{FailedFile, FileInfo, MergeResult, MergeSuccess};
use crate::utils::{file_name_of, format_file_size, rounded_secs};
use crate::validation::DocumentHandle;

/// Concatenates validated documents into one output file.
#[derive(Debug, Clone, Default)]
pub struct Merger {
    reader: PdfReader,
    writer: PdfWriter,
}

impl Merger {
    /// Create a merger with the default reader and writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `documents`, in the given order, into `output_path`.
    ///
    /// Every document is opened again. A document that fails to open or
    /// append is logged, recorded as a [`FailedFile`] and skipped; the others
    /// are still merged. Write failures and a missing output after the write
    /// are reported as a failed [`MergeResult`], never as an `Err`.
    ///
    /// # Errors
    ///
    /// Returns [`PdfMergerError::NotEnoughFiles`] when fewer than two
    /// documents are given.
    pub fn merge(&self, documents: &[DocumentHandle], output_path: &Path) -> Result<MergeResult> {
        if documents.len() < 2 {
            return Err(PdfMergerError::NotEnoughFiles {
                found: documents.len(),
            });
        }

        info!("Starting PDF merge process...");
        info!("Output file: {}", file_name_of(output_path));

        let start = Instant::now();
        let total = documents.len();

        let mut accumulator = PageAccumulator::new();
        let mut file_info = Vec::with_capacity(total);
        let mut failed_files = Vec::new();

        for (idx, handle) in documents.iter().enumerate() {
            info!("[{}/{}] Processing: {}", idx + 1, total, handle.file_name);

            match self.append(&mut accumulator, handle) {
                Ok(file) => {
                    info!("✓ Added {} pages from {}", file.pages, file.filename);
                    file_info.push(file);
                }
                Err(err) => {
                    error!("✗ Failed to process {}: {err}", handle.file_name);
                    failed_files.push(FailedFile {
                        filename: handle.file_name.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        let total_pages = accumulator.page_count();
        if total_pages == 0 {
            return Ok(Self::failed(
                &PdfMergerError::NothingMerged,
                start,
                failed_files,
            ));
        }

        info!("Writing merged PDF with {total_pages} total pages...");

        let mut merged = accumulator.into_document();
        let stats = match self
            .writer
            .save(&mut merged, output_path)
            .and_then(Self::verify_output)
        {
            Ok(stats) => stats,
            Err(err) => return Ok(Self::failed(&err, start, failed_files)),
        };

        debug!(
            "Wrote {} in {} seconds",
            file_name_of(&stats.output_path),
            rounded_secs(stats.write_time)
        );
        let merge_time = start.elapsed();

        info!("✓ Merge completed successfully!");
        info!("✓ Output file: {}", file_name_of(&stats.output_path));
        info!("✓ Total pages: {total_pages}");
        info!(
            "✓ Output size: {} bytes ({})",
            stats.file_size,
            stats.format_file_size()
        );
        info!("✓ Merge time: {} seconds", rounded_secs(merge_time));

        Ok(MergeResult::Success(MergeSuccess {
            output_path: stats.output_path,
            total_pages,
            total_files: total,
            output_size: stats.file_size,
            merge_time,
            file_info,
            failed_files,
        }))
    }

    fn append(&self, accumulator: &mut PageAccumulator, handle: &DocumentHandle) -> Result<FileInfo> {
        let loaded = self.reader.load(&handle.path)?;
        if loaded.page_count == 0 {
            return Err(PdfMergerError::NoPages {
                path: handle.path.clone(),
            });
        }

        debug!(
            "Adding {} pages from {} ({}, loaded in {} seconds)",
            loaded.page_count,
            handle.file_name,
            format_file_size(loaded.file_size),
            rounded_secs(loaded.load_time)
        );

        let pages = accumulator.append_document(loaded.document)?;

        Ok(FileInfo {
            filename: handle.file_name.clone(),
            pages,
            file_size: loaded.file_size,
        })
    }

    fn verify_output(stats: WriteStatistics) -> Result<WriteStatistics> {
        match stats.output_path.try_exists() {
            Ok(true) => Ok(stats),
            _ => {
                error!("Merge appeared to succeed but output file not found");
                Err(PdfMergerError::OutputMissing {
                    path: stats.output_path,
                })
            }
        }
    }

    fn failed(err: &PdfMergerError, start: Instant, failed_files: Vec<FailedFile>) -> MergeResult {
        error!("✗ Merge failed: {err}");
        error!("Error type: {}", err.kind());
        MergeResult::failure(err, start.elapsed(), failed_files)
    }
}

//! Candidate discovery and processing order.
//!
//! Discovery never aborts because of a single bad file: every candidate that
//! fails a validation predicate is logged with its reason and left out.

use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::utils::{collect_pdf_candidates, file_name_of, list_directory};
use crate::validation::{DocumentHandle, Validator};

/// Find and validate the documents in `input_dir`.
///
/// Returns the accepted documents in enumeration order. An input location
/// without any `.pdf` entry yields an empty list, not an error.
///
/// # Errors
///
/// Returns an error only if the candidate enumeration itself fails.
pub fn discover_documents(input_dir: &Path, validator: &Validator) -> Result<Vec<DocumentHandle>> {
    info!("Searching for PDF files...");

    let candidates = collect_pdf_candidates(input_dir)?;
    debug!("Found {} PDF files", candidates.len());

    if candidates.is_empty() {
        warn!("No PDF files found");
        debug!("All files in directory: {:?}", list_directory(input_dir));
        return Ok(Vec::new());
    }

    let mut documents = Vec::with_capacity(candidates.len());
    for candidate in &candidates {
        match validator.validate_file(candidate) {
            Ok(handle) => documents.push(handle),
            Err(err) => {
                warn!("Skipping {}: {err}", file_name_of(candidate));
            }
        }
    }

    info!(
        "Validation complete: {} valid files out of {} found",
        documents.len(),
        candidates.len()
    );

    Ok(documents)
}

/// Sort documents by file name, case-insensitively, ascending.
///
/// The sort is stable, so names that compare equal keep their discovery order.
pub fn sort_documents(mut documents: Vec<DocumentHandle>) -> Vec<DocumentHandle> {
    info!("Sorting PDF files alphabetically...");
    documents.sort_by_cached_key(|document| document.file_name.to_lowercase());

    info!("File order for merging:");
    for (idx, document) in documents.iter().enumerate() {
        info!("  {}. {}", idx + 1, document.file_name);
    }

    documents
}

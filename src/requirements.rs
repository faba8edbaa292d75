//! Runtime requirement check.
//!
//! The codec is linked in, so "available" means it can still write and read
//! back a trivial document.

use lopdf::Document;
use tracing::{debug, error, info};

use crate::error::{PdfMergerError, Result};
use crate::io::{A4, blank_document};

/// Check that the PDF codec is usable.
///
/// Logs the failure reason and returns `false` when the self-test fails.
pub fn check_system_requirements() -> bool {
    info!("Checking system requirements...");
    debug!("{} version: {}", crate::NAME, crate::VERSION);
    debug!("PDF codec: lopdf");

    match codec_self_test() {
        Ok(()) => {
            debug!("PDF codec self-test passed");
            true
        }
        Err(err) => {
            error!("{err}");
            false
        }
    }
}

/// Serialize a one-page document in memory and parse it back.
///
/// # Errors
///
/// Returns [`PdfMergerError::CodecUnavailable`] if either direction fails or
/// the page does not survive.
pub fn codec_self_test() -> Result<()> {
    let mut doc = blank_document(1, A4);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| PdfMergerError::codec_unavailable(format!("serialization failed: {e}")))?;

    let reloaded = Document::load_mem(&bytes)
        .map_err(|e| PdfMergerError::codec_unavailable(format!("parsing failed: {e}")))?;

    match reloaded.get_pages().len() {
        1 => Ok(()),
        found => Err(PdfMergerError::codec_unavailable(format!(
            "expected 1 page after round trip, found {found}"
        ))),
    }
}

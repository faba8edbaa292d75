//! PDF input/output operations.
//!
//! This module is the boundary to the PDF codec (`lopdf`):
//! - [`PdfReader`] opens a document and reports its page count and size
//! - [`PdfWriter`] serializes a document or copies a file through a
//!   temporary sibling that is renamed into place
//! - [`blank_document`] builds a minimal in-memory document

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfWriter, WriteStatistics};

use lopdf::{Document, Object, Stream, dictionary};

/// A4 page size in points.
pub const A4: [f32; 2] = [595.0, 842.0];

/// Build a document with `page_count` empty pages of the given size.
///
/// The page tree is flat: one `Pages` root holding every page.
pub fn blank_document(page_count: u32, [width, height]: [f32; 2]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::with_capacity(page_count as usize);
    for _ in 0..page_count {
        let content_id = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => Object::Array(vec![0.into(), 0.into(), width.into(), height.into()]),
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => i64::from(page_count),
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc
}

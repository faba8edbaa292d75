//! Page accumulator for the merge engine.
//!
//! Each appended document is renumbered into a shared object id space. Its
//! page dictionaries are collected in page-tree order with inheritable
//! attributes flattened onto them, and a fresh `Pages` root and `Catalog` are
//! built when the accumulator is finalized.

use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};
use std::collections::BTreeMap;

use crate::error::Result;

/// Page attributes a page may inherit from its ancestors in the page tree.
pub const INHERITABLE_PAGE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Lowest version written for a merged document.
const MIN_VERSION: &str = "1.5";

/// Deepest page tree walked when resolving inherited attributes.
const MAX_TREE_DEPTH: usize = 64;

/// Object types rebuilt for the merged document instead of copied.
const REBUILT_TYPES: [&[u8]; 5] = [b"Catalog", b"Pages", b"Page", b"Outlines", b"Outline"];

/// Collects pages from several documents in processing order.
#[derive(Debug)]
pub struct PageAccumulator {
    objects: BTreeMap<ObjectId, Object>,
    pages: Vec<ObjectId>,
    max_id: u32,
    version: String,
}

impl Default for PageAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl PageAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            objects: BTreeMap::new(),
            pages: Vec::new(),
            max_id: 0,
            version: MIN_VERSION.to_string(),
        }
    }

    /// Pages collected so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Append every page of `doc`, in its own page order.
    ///
    /// Either all pages of `doc` are appended or, on error, the accumulator
    /// is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if a page object cannot be read from `doc`.
    pub fn append_document(&mut self, mut doc: Document) -> Result<usize> {
        doc.renumber_objects_with(self.max_id + 1);

        let mut pages = Vec::new();
        for page_id in doc.get_pages().into_values() {
            let mut page = doc.get_dictionary(page_id)?.clone();
            for key in INHERITABLE_PAGE_KEYS {
                if !page.has(key)
                    && let Some(value) = inherited_attribute(&doc, &page, key)
                {
                    page.set(key, value);
                }
            }
            pages.push((page_id, page));
        }

        let appended = pages.len();

        for (id, object) in doc.objects {
            let rebuilt = object
                .type_name()
                .is_ok_and(|name| REBUILT_TYPES.contains(&name));
            if !rebuilt {
                self.objects.insert(id, object);
            }
        }
        for (id, page) in pages {
            self.objects.insert(id, Object::Dictionary(page));
            self.pages.push(id);
        }

        self.max_id = self.max_id.max(doc.max_id);
        if version_key(&doc.version) > version_key(&self.version) {
            self.version = doc.version;
        }

        Ok(appended)
    }

    /// Build the merged document.
    pub fn into_document(self) -> Document {
        let Self {
            objects,
            pages,
            max_id,
            version,
        } = self;

        let mut doc = Document::with_version(version);
        doc.objects = objects;
        doc.max_id = max_id;

        let pages_id = doc.new_object_id();
        for page_id in &pages {
            if let Some(Object::Dictionary(page)) = doc.objects.get_mut(page_id) {
                page.set("Parent", pages_id);
            }
        }

        let kids: Vec<Object> = pages.iter().copied().map(Object::Reference).collect();
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Count" => pages.len() as i64,
                "Kids" => kids,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        doc.renumber_objects();
        doc
    }
}

/// Look up `key` on the ancestors of `page`, nearest first.
pub fn inherited_attribute(doc: &Document, page: &Dictionary, key: &[u8]) -> Option<Object> {
    let mut parent_id = page.get(b"Parent").and_then(Object::as_reference).ok()?;

    for _ in 0..MAX_TREE_DEPTH {
        let parent = doc.get_dictionary(parent_id).ok()?;
        if let Ok(value) = parent.get(key) {
            return Some(value.clone());
        }
        parent_id = parent.get(b"Parent").and_then(Object::as_reference).ok()?;
    }

    None
}

fn version_key(version: &str) -> (u32, u32) {
    let mut parts = version.split('.').map(|part| part.trim().parse().unwrap_or(0));
    (parts.next().unwrap_or(0), parts.next().unwrap_or(0))
}

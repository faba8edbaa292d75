//! pdf-merger - Merge a directory of PDF files into a single document.
//!
//! Every `.pdf` file in `./input` is validated, ordered by name
//! (case-insensitively) and concatenated page by page into
//! `./output/merged_pdf_<YYYYMMDD_HHMMSS>.pdf`:
//!
//! - Invalid, empty and page-less files are skipped with a warning
//! - A single valid file is copied unchanged instead of merged
//! - Files that break between validation and merge are skipped and reported
//! - The output is written to a temporary file and renamed into place
//!
//! # Examples
//!
//! ## Full run
//!
//! ```no_run
//! use pdf_merger::config::Config;
//! use pdf_merger::pipeline::{self, RunOutcome};
//!
//! let config = Config::default();
//! match pipeline::run(&config) {
//!     RunOutcome::Merged { result } => println!("merged: {}", result.is_success()),
//!     RunOutcome::Copied { output_path, .. } => println!("copied to {}", output_path.display()),
//!     RunOutcome::Planned { plan } => println!("{} pages planned", plan.total_pages),
//!     RunOutcome::Aborted { error, .. } => eprintln!("{error}"),
//! }
//! ```
//!
//! ## Using Individual Components
//!
//! ```no_run
//! use pdf_merger::discovery::{discover_documents, sort_documents};
//! use pdf_merger::merge::Merger;
//! use pdf_merger::validation::Validator;
//! use std::path::Path;
//!
//! # fn example() -> pdf_merger::Result<()> {
//! let documents = discover_documents(Path::new("input"), &Validator::new())?;
//! let documents = sort_documents(documents);
//!
//! let result = Merger::new().merge(&documents, Path::new("output/merged.pdf"))?;
//! println!("success: {}", result.is_success());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod io;
pub mod logging;
pub mod merge;
pub mod output;
pub mod pipeline;
pub mod requirements;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{PdfMergerError, Result};
pub use merge::{MergeResult, Merger};
pub use pipeline::RunOutcome;
pub use validation::{DocumentHandle, Validator};

/// Version of the pdf-merger library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the pdf-merger library.
pub const NAME: &str = env!("CARGO_PKG_NAME");

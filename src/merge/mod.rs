//! PDF merging.
//!
//! - [`PageAccumulator`] collects pages from several documents in order
//! - [`Merger`] re-opens validated documents, feeds the accumulator and writes
//!   the result
//! - [`MergeResult`] records the outcome of one merge

pub mod accumulator;
pub mod merger;
pub mod result;

pub use accumulator::PageAccumulator;
pub use merger::Merger;
pub use result::{FailedFile, FileInfo, MergeFailure, MergeResult, MergeSuccess};

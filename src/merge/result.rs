//! Outcome records of a merge invocation.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::PdfMergerError;
use crate::utils::{format_file_size, serialize_secs};

/// Statistics for one document that contributed pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    /// Source file name.
    pub filename: String,

    /// Pages appended from this file.
    pub pages: usize,

    /// Source size in bytes.
    pub file_size: u64,
}

impl FileInfo {
    /// Format the source size as a human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// A document that passed discovery but failed during the merge pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedFile {
    /// Source file name.
    pub filename: String,

    /// Why the file was skipped.
    pub reason: String,
}

/// A merge that produced an output file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeSuccess {
    /// Path of the merged document.
    pub output_path: PathBuf,

    /// Pages in the merged document.
    pub total_pages: usize,

    /// Documents handed to the merge, including those that failed.
    pub total_files: usize,

    /// Size of the merged document in bytes.
    pub output_size: u64,

    /// Time from the first open to the verified write.
    #[serde(rename = "mergeTimeSecs", serialize_with = "serialize_secs")]
    pub merge_time: Duration,

    /// Contributing documents, in merge order.
    pub file_info: Vec<FileInfo>,

    /// Documents skipped during the merge pass.
    pub failed_files: Vec<FailedFile>,
}

impl MergeSuccess {
    /// Name of the merged document.
    pub fn output_file_name(&self) -> String {
        crate::utils::file_name_of(&self.output_path)
    }
}

/// A merge that did not produce an output file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeFailure {
    /// Description of the error.
    pub error: String,

    /// Stable tag naming the error variant.
    pub error_kind: String,

    /// Time until the failure was detected.
    #[serde(rename = "mergeTimeSecs", serialize_with = "serialize_secs")]
    pub merge_time: Duration,

    /// Documents skipped during the merge pass.
    pub failed_files: Vec<FailedFile>,
}

/// Outcome of one merge invocation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MergeResult {
    /// The output exists and holds every page that could be appended.
    Success(MergeSuccess),
    /// No output was produced.
    Failure(MergeFailure),
}

impl MergeResult {
    /// Build a failure from the error that ended the merge.
    pub fn failure(
        error: &PdfMergerError,
        merge_time: Duration,
        failed_files: Vec<FailedFile>,
    ) -> Self {
        Self::Failure(MergeFailure {
            error: error.to_string(),
            error_kind: error.kind().to_string(),
            merge_time,
            failed_files,
        })
    }

    /// Whether the merge produced an output file.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Documents skipped during the merge pass.
    pub fn failed_files(&self) -> &[FailedFile] {
        match self {
            Self::Success(success) => &success.failed_files,
            Self::Failure(failure) => &failure.failed_files,
        }
    }
}

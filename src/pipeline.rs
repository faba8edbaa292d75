//! One complete run of the merger.
//!
//! ```text
//! requirements -> directories -> discovery -> 0 files: abort
//!                                          -> 1 file:  copy
//!                                          -> n files: order -> merge -> summary
//! ```
//!
//! The run is synchronous and logs through whatever dispatch the caller has
//! installed.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::discovery::{discover_documents, sort_documents};
use crate::error::{PdfMergerError, Result};
use crate::io::PdfWriter;
use crate::merge::{FileInfo, MergeResult, Merger};
use crate::output::SummaryReporter;
use crate::requirements::check_system_requirements;
use crate::utils::{format_file_size, rounded_secs};
use crate::validation::{DocumentHandle, Validator, absolute_display, validate_directories};

/// What a dry run would have done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PlannedAction {
    /// Copy the single valid document unchanged.
    Copy,
    /// Merge two or more documents.
    Merge,
}

/// The plan logged by a dry run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergePlan {
    /// Copy or merge.
    pub action: PlannedAction,

    /// Where the output would be written.
    pub output_path: PathBuf,

    /// Inputs in processing order.
    pub files: Vec<FileInfo>,

    /// Pages the output would contain.
    pub total_pages: usize,
}

impl MergePlan {
    fn new(action: PlannedAction, output_path: PathBuf, documents: &[DocumentHandle]) -> Self {
        let files: Vec<FileInfo> = documents
            .iter()
            .map(|document| FileInfo {
                filename: document.file_name.clone(),
                pages: document.page_count,
                file_size: document.file_size,
            })
            .collect();
        let total_pages = files.iter().map(|file| file.pages).sum();

        Self {
            action,
            output_path,
            files,
            total_pages,
        }
    }

    fn log(&self) {
        info!("Merge plan:");
        for (idx, file) in self.files.iter().enumerate() {
            info!(
                "  {}. {} ({} pages, {})",
                idx + 1,
                file.filename,
                file.pages,
                file.format_file_size()
            );
        }
        info!("  Total pages in output: {}", self.total_pages);
        info!("  Output would be: {}", self.output_path.display());
        info!("Dry run completed successfully; run without --dry-run to write the output");
    }
}

/// How a run ended.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum RunOutcome {
    /// Two or more documents went through the merge engine.
    Merged {
        /// Outcome of the merge.
        result: MergeResult,
    },

    /// The single valid document was copied unchanged.
    #[serde(rename_all = "camelCase")]
    Copied {
        /// The copied document.
        source: PathBuf,
        /// The copy.
        output_path: PathBuf,
        /// Bytes copied.
        file_size: u64,
    },

    /// Dry run; nothing was written.
    Planned {
        /// What would have happened.
        plan: MergePlan,
    },

    /// A fatal error stopped the run.
    #[serde(rename_all = "camelCase")]
    Aborted {
        /// Description of the error.
        error: String,
        /// Stable tag naming the error variant.
        error_kind: String,
    },
}

impl From<&PdfMergerError> for RunOutcome {
    fn from(err: &PdfMergerError) -> Self {
        Self::Aborted {
            error: err.to_string(),
            error_kind: err.kind().to_string(),
        }
    }
}

/// Run the merger with `config`, naming any merged output after the current
/// local time.
pub fn run(config: &Config) -> RunOutcome {
    run_at(config, Local::now())
}

/// Run the merger with `config`, naming any merged output after `started_at`.
///
/// Fatal errors are logged and turned into [`RunOutcome::Aborted`].
pub fn run_at(config: &Config, started_at: DateTime<Local>) -> RunOutcome {
    info!("{}", "=".repeat(60));
    info!("PDF Merger Tool Started");
    info!("{}", "=".repeat(60));

    match execute(config, started_at) {
        Ok(outcome) => outcome,
        Err(err) => {
            debug!("Run aborted: {}", err.kind());
            RunOutcome::from(&err)
        }
    }
}

fn execute(config: &Config, started_at: DateTime<Local>) -> Result<RunOutcome> {
    config.validate().inspect_err(|e| error!("{e}"))?;

    if config.dry_run {
        info!("DRY RUN MODE - No files will be created");
    }

    if !check_system_requirements() {
        error!("System requirements not met. Exiting.");
        return Err(PdfMergerError::codec_unavailable("self-test failed"));
    }

    validate_directories(&config.input_dir, &config.output_dir)
        .inspect_err(|_| error!("Directory validation failed. Exiting."))?;

    let validator = if config.verbose {
        Validator::verbose()
    } else {
        Validator::new()
    };
    let mut documents = discover_documents(&config.input_dir, &validator)?;

    match documents.len() {
        0 => {
            error!("No valid PDF files found in the input directory!");
            info!(
                "Please place your PDF files in: {}",
                absolute_display(&config.input_dir)
            );
            return Err(PdfMergerError::NoValidFiles {
                input_dir: config.input_dir.clone(),
            });
        }
        1 => return copy_single(config, documents.remove(0)),
        _ => {}
    }

    let documents = sort_documents(documents);

    let output_path = config.merged_output_path(started_at);
    info!("Default output filename: {}", Config::output_file_name(started_at));

    if config.dry_run {
        let plan = MergePlan::new(PlannedAction::Merge, output_path, &documents);
        plan.log();
        return Ok(RunOutcome::Planned { plan });
    }

    let result = Merger::new().merge(&documents, &output_path)?;
    SummaryReporter::from_config(config).report(&result);

    Ok(RunOutcome::Merged { result })
}

fn copy_single(config: &Config, document: DocumentHandle) -> Result<RunOutcome> {
    warn!("Only one PDF file found. At least 2 files are needed for merging.");
    info!("If you want to copy the single file, it will be copied to output directory.");

    let destination = config.output_dir.join(&document.file_name);

    if config.dry_run {
        let plan = MergePlan::new(
            PlannedAction::Copy,
            destination,
            std::slice::from_ref(&document),
        );
        plan.log();
        return Ok(RunOutcome::Planned { plan });
    }

    let stats = PdfWriter::new()
        .copy_file(&document.path, &destination)
        .inspect_err(|e| error!("✗ Failed to copy file: {e}"))?;

    info!(
        "✓ Single file copied: {} ({})",
        document.file_name,
        format_file_size(stats.file_size)
    );
    debug!("Copy took {} seconds", rounded_secs(stats.write_time));

    Ok(RunOutcome::Copied {
        source: document.path,
        output_path: stats.output_path,
        file_size: stats.file_size,
    })
}

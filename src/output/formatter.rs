//! Merge summary formatting.
//!
//! Formatting is pure: [`SummaryReporter::lines`] turns a [`MergeResult`]
//! into leveled lines, and [`SummaryReporter::report`] sends them to the
//! diagnostics sink at their level.
//!
//! # Examples
//!
//! ```
//! use pdf_merger::output::formatter::{MessageLevel, SummaryLine};
//!
//! let line = SummaryLine::new(MessageLevel::Success, "Merge Status: SUCCESS");
//! assert_eq!(line.to_string(), "✓ Merge Status: SUCCESS");
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::merge::{MergeFailure, MergeResult, MergeSuccess};
use crate::utils::{format_file_size, rounded_secs};

/// Width of the summary rules.
const RULE_WIDTH: usize = 60;

/// Level of output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Informational message.
    Info,
    /// Success message.
    Success,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
}

impl MessageLevel {
    /// Marker printed before the message text.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Info => "",
            Self::Success => "✓ ",
            Self::Warning => "⚠ ",
            Self::Error => "✗ ",
        }
    }
}

/// One formatted line of the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    /// Severity the line is logged at.
    pub level: MessageLevel,

    /// Text without the level prefix.
    pub text: String,
}

impl SummaryLine {
    /// Create a line.
    pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    fn info(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, text)
    }

    fn success(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, text)
    }

    fn rule(ch: char) -> Self {
        Self::info(ch.to_string().repeat(RULE_WIDTH))
    }
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.level.prefix(), self.text)
    }
}

/// Formats and emits the merge summary.
#[derive(Debug, Clone)]
pub struct SummaryReporter {
    log_file: PathBuf,
}

impl SummaryReporter {
    /// Create a reporter pointing readers at `log_file`.
    pub fn new(log_file: impl Into<PathBuf>) -> Self {
        Self {
            log_file: log_file.into(),
        }
    }

    /// Create a reporter from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.log_file)
    }

    /// Log file named in the closing lines.
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Format `result` as summary lines.
    pub fn lines(&self, result: &MergeResult) -> Vec<SummaryLine> {
        let mut lines = vec![
            SummaryLine::rule('-'),
            SummaryLine::info("MERGE SUMMARY"),
            SummaryLine::rule('-'),
        ];

        match result {
            MergeResult::Success(success) => Self::success_lines(success, &mut lines),
            MergeResult::Failure(failure) => Self::failure_lines(failure, &mut lines),
        }

        for failed in result.failed_files() {
            lines.push(SummaryLine::new(
                MessageLevel::Warning,
                format!("Skipped during merge: {} ({})", failed.filename, failed.reason),
            ));
        }

        lines.push(SummaryLine::rule('='));
        lines.push(SummaryLine::info(format!(
            "Debug log saved to: {}",
            self.log_file.display()
        )));
        lines.push(SummaryLine::rule('='));

        lines
    }

    /// Format and emit the summary of `result`.
    pub fn report(&self, result: &MergeResult) {
        for line in self.lines(result) {
            emit(&line);
        }
    }

    fn success_lines(success: &MergeSuccess, lines: &mut Vec<SummaryLine>) {
        lines.extend([
            SummaryLine::success("Merge Status: SUCCESS"),
            SummaryLine::success(format!("Output File: {}", success.output_file_name())),
            SummaryLine::success(format!("Total Files Merged: {}", success.total_files)),
            SummaryLine::success(format!("Total Pages: {}", success.total_pages)),
            SummaryLine::success(format!(
                "Output Size: {}",
                format_file_size(success.output_size)
            )),
            SummaryLine::success(format!(
                "Merge Time: {} seconds",
                rounded_secs(success.merge_time)
            )),
            SummaryLine::info("File Details:"),
        ]);

        lines.extend(success.file_info.iter().map(|file| {
            SummaryLine::info(format!(
                "  • {}: {} pages ({})",
                file.filename,
                file.pages,
                file.format_file_size()
            ))
        }));
    }

    fn failure_lines(failure: &MergeFailure, lines: &mut Vec<SummaryLine>) {
        lines.extend([
            SummaryLine::new(MessageLevel::Error, "Merge Status: FAILED"),
            SummaryLine::new(MessageLevel::Error, format!("Error: {}", failure.error)),
            SummaryLine::new(
                MessageLevel::Error,
                format!("Error Kind: {}", failure.error_kind),
            ),
        ]);
    }
}

/// Log `line` at its level.
pub fn emit(line: &SummaryLine) {
    match line.level {
        MessageLevel::Info | MessageLevel::Success => info!("{line}"),
        MessageLevel::Warning => warn!("{line}"),
        MessageLevel::Error => error!("{line}"),
    }
}

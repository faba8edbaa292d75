//! Configuration module for pdf-merger.
//!
//! The input and output locations are fixed relative paths resolved against
//! the process working directory. The command line never overrides them; a
//! [`Config`] value carries them so that every component receives its
//! locations explicitly.

use chrono::{DateTime, Local};
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{PdfMergerError, Result};

/// Directory scanned for documents.
pub const DEFAULT_INPUT_DIR: &str = "input";

/// Directory receiving the merged document.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Persistent diagnostics log.
pub const DEFAULT_LOG_FILE: &str = "pdf_merger_debug.log";

/// Prefix of auto-generated output file names.
pub const OUTPUT_FILE_PREFIX: &str = "merged_pdf_";

/// Validated configuration driving one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Location scanned for `.pdf` candidates.
    pub input_dir: PathBuf,

    /// Location receiving the output document.
    pub output_dir: PathBuf,

    /// Debug log file shared with the console stream.
    pub log_file: PathBuf,

    /// Validate and plan without writing output.
    pub dry_run: bool,

    /// Log per-document details during discovery.
    pub verbose: bool,

    /// Print the run outcome as JSON on stdout.
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            dry_run: false,
            verbose: false,
            json: false,
        }
    }
}

impl Config {
    /// Create a configuration with custom locations.
    ///
    /// Used by library callers and tests; the binary always runs with
    /// [`Config::default`] locations.
    pub fn with_dirs(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Check the configuration for contradictions.
    ///
    /// # Errors
    ///
    /// Returns an error if the input and output locations are the same path
    /// or either one is empty.
    pub fn validate(&self) -> Result<()> {
        if self.input_dir.as_os_str().is_empty() || self.output_dir.as_os_str().is_empty() {
            return Err(PdfMergerError::invalid_config(
                "Input and output directories must not be empty",
            ));
        }

        if self.input_dir == self.output_dir {
            return Err(PdfMergerError::invalid_config(format!(
                "Input and output directories must differ: {}",
                self.input_dir.display()
            )));
        }

        Ok(())
    }

    /// Name of the merged document for a run started at `started_at`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Local, TimeZone};
    /// use pdf_merger::config::Config;
    ///
    /// let started = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
    /// assert_eq!(Config::output_file_name(started), "merged_pdf_20240309_140507.pdf");
    /// ```
    pub fn output_file_name(started_at: DateTime<Local>) -> String {
        format!(
            "{OUTPUT_FILE_PREFIX}{}.pdf",
            started_at.format("%Y%m%d_%H%M%S")
        )
    }

    /// Full path of the merged document for a run started at `started_at`.
    pub fn merged_output_path(&self, started_at: DateTime<Local>) -> PathBuf {
        self.output_dir.join(Self::output_file_name(started_at))
    }
}

impl TryFrom<&Cli> for Config {
    type Error = PdfMergerError;

    fn try_from(cli: &Cli) -> Result<Self> {
        let config = Self {
            dry_run: cli.dry_run,
            verbose: cli.verbose,
            json: cli.json,
            ..Default::default()
        };

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_locations() {
        let config = Config::default();
        assert_eq!(config.input_dir, PathBuf::from("input"));
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.log_file, PathBuf::from("pdf_merger_debug.log"));
        assert!(!config.dry_run);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_file_name_format() {
        let started = Local.with_ymd_and_hms(2025, 12, 31, 23, 59, 58).unwrap();
        assert_eq!(
            Config::output_file_name(started),
            "merged_pdf_20251231_235958.pdf"
        );
    }

    #[test]
    fn test_output_file_names_differ_by_timestamp() {
        let first = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let second = first + chrono::Duration::seconds(1);
        assert_ne!(
            Config::output_file_name(first),
            Config::output_file_name(second)
        );
    }

    #[test]
    fn test_merged_output_path_is_inside_output_dir() {
        let config = Config::with_dirs("in", "out");
        let started = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let path = config.merged_output_path(started);
        assert!(path.starts_with("out"));
        assert!(path.ends_with("merged_pdf_20250102_030405.pdf"));
    }

    #[test]
    fn test_validate_same_dirs() {
        let config = Config::with_dirs("docs", "docs");
        assert!(matches!(
            config.validate(),
            Err(PdfMergerError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_validate_empty_dir() {
        let config = Config::with_dirs("", "out");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_try_from_cli_keeps_fixed_locations() {
        let cli = Cli {
            dry_run: true,
            verbose: true,
            json: false,
        };
        let config = Config::try_from(&cli).unwrap();
        assert!(config.dry_run);
        assert!(config.verbose);
        assert_eq!(config.input_dir, PathBuf::from(DEFAULT_INPUT_DIR));
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    }
}

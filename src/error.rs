//! Error types for pdf-merger.
//!
//! Errors fall into the categories the merge run distinguishes:
//!
//! - **Environment**: the PDF codec failed its self-test
//! - **Directory**: input or output location cannot be created or accessed
//! - **Per-file**: a candidate document is unreadable, empty, unparsable or has no pages
//! - **Merge**: the merged document could not be written or is missing afterwards
//! - **Run**: nothing valid to merge, invalid configuration, logging setup

use std::io;
use std::path::PathBuf;

/// Result type alias for pdf-merger operations.
pub type Result<T> = std::result::Result<T, PdfMergerError>;

/// Main error type for pdf-merger operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfMergerError {
    /// The PDF codec self-test failed.
    #[error("PDF codec is not usable: {reason}")]
    CodecUnavailable {
        /// Why the self-test failed.
        reason: String,
    },

    /// A required directory could not be created.
    #[error("Failed to create directory: {}\n  Reason: {source}", path.display())]
    FailedToCreateDirectory {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A location that must be a directory is something else.
    #[error("Not a directory: {}", path.display())]
    NotADirectory {
        /// Offending path.
        path: PathBuf,
    },

    /// The input directory cannot be listed.
    #[error("No read permission for input directory: {}\n  Reason: {source}", path.display())]
    DirectoryNotReadable {
        /// Input directory.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The output directory does not accept new files.
    #[error("No write permission for output directory: {}\n  Reason: {source}", path.display())]
    DirectoryNotWritable {
        /// Output directory.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Candidate file does not exist.
    #[error("File doesn't exist: {}", path.display())]
    FileNotFound {
        /// Missing file.
        path: PathBuf,
    },

    /// Candidate path exists but is not a regular file.
    #[error("Not a file: {}", path.display())]
    NotAFile {
        /// Offending path.
        path: PathBuf,
    },

    /// Candidate file cannot be opened for reading.
    #[error("No read permission for file: {}\n  Reason: {source}", path.display())]
    FileNotReadable {
        /// Unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Candidate file has zero bytes.
    #[error("File is empty: {}", path.display())]
    EmptyFile {
        /// Empty file.
        path: PathBuf,
    },

    /// The codec could not parse the file.
    #[error("Invalid PDF file: {}\n  Reason: {reason}", path.display())]
    FailedToLoadPdf {
        /// Unparsable file.
        path: PathBuf,
        /// Codec error text.
        reason: String,
    },

    /// The file is encrypted.
    #[error(
        "PDF is encrypted and cannot be processed: {}\n  Hint: Decrypt the PDF first using 'qpdf --decrypt' or similar tools",
        path.display()
    )]
    EncryptedPdf {
        /// Encrypted file.
        path: PathBuf,
    },

    /// The file parsed but holds no pages.
    #[error("PDF has no pages: {}", path.display())]
    NoPages {
        /// Page-less file.
        path: PathBuf,
    },

    /// Discovery produced no usable document.
    #[error("No valid PDF files found in the input directory: {}", input_dir.display())]
    NoValidFiles {
        /// Input directory that was scanned.
        input_dir: PathBuf,
    },

    /// The merge engine was handed fewer than two documents.
    #[error("At least 2 files are needed for merging, got {found}")]
    NotEnoughFiles {
        /// Number of documents supplied.
        found: usize,
    },

    /// Every document failed during the merge pass.
    #[error("No pages could be merged: every input failed during the merge pass")]
    NothingMerged,

    /// The output file could not be created.
    #[error("Failed to create output file: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Serializing or persisting the output failed.
    #[error("Failed to write to output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The write reported success but the destination is absent.
    #[error("Output file not created: {}", path.display())]
    OutputMissing {
        /// Expected output path.
        path: PathBuf,
    },

    /// The single valid document could not be copied.
    #[error("Failed to copy file: {} -> {}\n  Reason: {source}", from.display(), to.display())]
    FailedToCopy {
        /// Source document.
        from: PathBuf,
        /// Destination path.
        to: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The debug log file could not be opened.
    #[error("Failed to open log file: {}\n  Reason: {source}", path.display())]
    FailedToOpenLog {
        /// Log file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// User cancelled the operation.
    #[error("Merge cancelled by user")]
    Cancelled,

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Codec error outside a per-file context.
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
}

impl PdfMergerError {
    /// Create a CodecUnavailable error.
    pub fn codec_unavailable(reason: impl Into<String>) -> Self {
        Self::CodecUnavailable {
            reason: reason.into(),
        }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Check if this error only excludes a single document from the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. }
                | Self::NotAFile { .. }
                | Self::FileNotReadable { .. }
                | Self::EmptyFile { .. }
                | Self::FailedToLoadPdf { .. }
                | Self::EncryptedPdf { .. }
                | Self::NoPages { .. }
        )
    }

    /// Check if this error aborts the run.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::CodecUnavailable { .. }
                | Self::FailedToCreateDirectory { .. }
                | Self::NotADirectory { .. }
                | Self::DirectoryNotReadable { .. }
                | Self::DirectoryNotWritable { .. }
                | Self::NoValidFiles { .. }
                | Self::FailedToCopy { .. }
                | Self::Cancelled
        )
    }

    /// Stable tag naming the error variant.
    ///
    /// Used as the `error_kind` of a failed merge result.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CodecUnavailable { .. } => "CodecUnavailable",
            Self::FailedToCreateDirectory { .. } => "FailedToCreateDirectory",
            Self::NotADirectory { .. } => "NotADirectory",
            Self::DirectoryNotReadable { .. } => "DirectoryNotReadable",
            Self::DirectoryNotWritable { .. } => "DirectoryNotWritable",
            Self::FileNotFound { .. } => "FileNotFound",
            Self::NotAFile { .. } => "NotAFile",
            Self::FileNotReadable { .. } => "FileNotReadable",
            Self::EmptyFile { .. } => "EmptyFile",
            Self::FailedToLoadPdf { .. } => "FailedToLoadPdf",
            Self::EncryptedPdf { .. } => "EncryptedPdf",
            Self::NoPages { .. } => "NoPages",
            Self::NoValidFiles { .. } => "NoValidFiles",
            Self::NotEnoughFiles { .. } => "NotEnoughFiles",
            Self::NothingMerged => "NothingMerged",
            Self::FailedToCreateOutput { .. } => "FailedToCreateOutput",
            Self::FailedToWrite { .. } => "FailedToWrite",
            Self::OutputMissing { .. } => "OutputMissing",
            Self::FailedToCopy { .. } => "FailedToCopy",
            Self::FailedToOpenLog { .. } => "FailedToOpenLog",
            Self::InvalidConfig { .. } => "InvalidConfig",
            Self::Cancelled => "Cancelled",
            Self::Io(_) => "Io",
            Self::Pdf(_) => "Pdf",
        }
    }
}

//! CLI argument parsing for pdf-merger.
//!
//! The tool always reads from `./input` and writes to `./output`; the flags
//! here only change how much is done and reported.
//!
//! # Examples
//!
//! ```no_run
//! use pdf_merger::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! println!("dry run: {}", cli.dry_run);
//! ```

use clap::Parser;

/// Merge every PDF in ./input into a single document in ./output.
///
/// Files are merged in case-insensitive alphabetical order. A single valid
/// file is copied unchanged instead of merged. Diagnostics go to the console
/// and to pdf_merger_debug.log; set RUST_LOG to change the log level.
#[derive(Parser, Debug)]
#[command(name = "pdf-merger")]
#[command(version)]
#[command(about = "Merge a directory of PDF files into a single document", long_about = None)]
pub struct Cli {
    /// Dry run - validate inputs and show the merge plan without creating output
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Verbose output - log PDF version, page size and object count of each input
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the outcome as JSON on stdout once the run finishes
    #[arg(long)]
    pub json: bool,
}

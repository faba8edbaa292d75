//! Diagnostics sink.
//!
//! Every event goes to the console and, without ANSI colors, to the debug log
//! file. Both layers share one filter. The returned [`Dispatch`] is installed
//! by the caller for the duration of a run with
//! [`tracing::dispatcher::with_default`]; nothing is registered globally.

use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::Dispatch;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::Config;
use crate::error::{PdfMergerError, Result};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "pdf_merger=debug,warn";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Build the console + file dispatch for `config`.
///
/// The log file is opened in append mode and created if missing. With
/// `config.json` the console layer writes to stderr so stdout carries only
/// the JSON outcome.
///
/// # Errors
///
/// Returns [`PdfMergerError::FailedToOpenLog`] if the log file cannot be
/// opened.
pub fn build_dispatch(config: &Config) -> Result<Dispatch> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .map_err(|e| PdfMergerError::FailedToOpenLog {
            path: config.log_file.clone(),
            source: e,
        })?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let console_writer = if config.json {
        BoxMakeWriter::new(std::io::stderr)
    } else {
        BoxMakeWriter::new(std::io::stdout)
    };

    let console = fmt::layer()
        .with_target(false)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_writer(console_writer);

    let log_file = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_writer(Mutex::new(file));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(log_file);

    Ok(Dispatch::new(subscriber))
}

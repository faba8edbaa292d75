//! Operator-facing output.

pub mod formatter;

pub use formatter::{MessageLevel, SummaryLine, SummaryReporter};

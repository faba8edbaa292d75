//! Integration tests for the fixed relative locations and the debug log.

use pdf_merger::config::Config;
use pdf_merger::logging::build_dispatch;
use pdf_merger::pipeline::{RunOutcome, run};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::common::write_pdf;

/// Restores the working directory when dropped.
struct CwdGuard(PathBuf);

impl CwdGuard {
    fn enter(dir: &std::path::Path) -> Self {
        let previous = env::current_dir().unwrap();
        env::set_current_dir(dir).unwrap();
        Self(previous)
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.0);
    }
}

#[test]
#[serial]
fn test_default_run_uses_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let _cwd = CwdGuard::enter(dir.path());
    fs::create_dir("input").unwrap();
    write_pdf(&dir.path().join("input").join("first.pdf"), 1, 100.0);
    write_pdf(&dir.path().join("input").join("second.pdf"), 2, 100.0);

    let config = Config::default();
    let dispatch = build_dispatch(&config).unwrap();
    let outcome = tracing::dispatcher::with_default(&dispatch, || run(&config));

    assert!(matches!(outcome, RunOutcome::Merged { ref result } if result.is_success()));

    let outputs: Vec<String> = fs::read_dir(dir.path().join("output"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(outputs.len(), 1);
    assert!(outputs[0].starts_with("merged_pdf_"));
    assert!(outputs[0].ends_with(".pdf"));

    let log = fs::read_to_string(dir.path().join("pdf_merger_debug.log")).unwrap();
    assert!(log.contains("PDF Merger Tool Started"));
    assert!(log.contains("MERGE SUMMARY"));
    assert!(log.contains("Debug log saved to: pdf_merger_debug.log"));
}

#[test]
#[serial]
fn test_default_run_without_input_creates_locations() {
    let dir = tempfile::tempdir().unwrap();
    let _cwd = CwdGuard::enter(dir.path());

    let config = Config::default();
    let dispatch = build_dispatch(&config).unwrap();
    let outcome = tracing::dispatcher::with_default(&dispatch, || run(&config));

    assert!(matches!(outcome, RunOutcome::Aborted { .. }));
    assert!(dir.path().join("input").is_dir());
    assert!(dir.path().join("output").is_dir());

    let log = fs::read_to_string(dir.path().join("pdf_merger_debug.log")).unwrap();
    assert!(log.contains("No valid PDF files found in the input directory!"));
    assert!(log.contains("Please place your PDF files in:"));
}

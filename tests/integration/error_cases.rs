//! Integration tests for rejected inputs and aborted runs.

use pdf_merger::merge::MergeResult;
use pdf_merger::pipeline::{RunOutcome, run_at};
use std::fs;

use crate::common::{Workspace, started_at};

fn error_kind(outcome: &RunOutcome) -> Option<&str> {
    match outcome {
        RunOutcome::Aborted { error_kind, .. } => Some(error_kind.as_str()),
        _ => None,
    }
}

#[test]
fn test_empty_input_directory_aborts() {
    let workspace = Workspace::new();

    let outcome = run_at(&workspace.config, started_at(0));

    assert_eq!(error_kind(&outcome), Some("NoValidFiles"));
    assert!(workspace.config.output_dir.is_dir());
    assert!(workspace.output_entries().is_empty());
}

#[test]
fn test_only_invalid_files_aborts_without_output() {
    let workspace = Workspace::new();
    workspace.add_file("empty.pdf", b"");
    workspace.add_file("garbage.pdf", b"definitely not a pdf");
    workspace.add_pdf("blank.pdf", 0, 100.0);

    let outcome = run_at(&workspace.config, started_at(0));

    assert_eq!(error_kind(&outcome), Some("NoValidFiles"));
    assert!(workspace.output_entries().is_empty());
}

#[test]
fn test_missing_directories_are_created() {
    let workspace = Workspace::new();
    fs::remove_dir(&workspace.config.input_dir).unwrap();

    let outcome = run_at(&workspace.config, started_at(0));

    assert_eq!(error_kind(&outcome), Some("NoValidFiles"));
    assert!(workspace.config.input_dir.is_dir());
    assert!(workspace.config.output_dir.is_dir());
}

#[test]
fn test_zero_page_document_never_reported() {
    let workspace = Workspace::new();
    workspace.add_pdf("a.pdf", 1, 100.0);
    workspace.add_pdf("b.pdf", 0, 100.0);
    workspace.add_pdf("c.pdf", 2, 100.0);

    let outcome = run_at(&workspace.config, started_at(0));

    let RunOutcome::Merged {
        result: MergeResult::Success(success),
    } = outcome
    else {
        panic!("expected a successful merge");
    };
    let names: Vec<&str> = success.file_info.iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(names, vec!["a.pdf", "c.pdf"]);
    assert_eq!(success.total_pages, 3);
    assert!(success.failed_files.is_empty());
}

#[test]
fn test_other_extensions_are_ignored() {
    let workspace = Workspace::new();
    workspace.add_pdf("keep.pdf", 1, 100.0);
    workspace.add_pdf("upper.PDF", 1, 100.0);
    workspace.add_pdf("document.txt", 1, 100.0);

    let outcome = run_at(&workspace.config, started_at(0));

    // Only keep.pdf is a candidate, so it is copied rather than merged.
    assert!(matches!(outcome, RunOutcome::Copied { .. }));
    assert_eq!(workspace.output_entries(), vec!["keep.pdf".to_string()]);
}

#[test]
fn test_output_location_that_is_a_file_aborts() {
    let workspace = Workspace::new();
    workspace.add_pdf("a.pdf", 1, 100.0);
    workspace.add_pdf("b.pdf", 1, 100.0);
    fs::write(&workspace.config.output_dir, b"in the way").unwrap();

    let outcome = run_at(&workspace.config, started_at(0));

    assert_eq!(error_kind(&outcome), Some("NotADirectory"));
}

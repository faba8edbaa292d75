//! Integration tests for complete merge runs.

use pdf_merger::discovery::{discover_documents, sort_documents};
use pdf_merger::merge::{MergeResult, MergeSuccess, Merger};
use pdf_merger::pipeline::{RunOutcome, run_at};
use pdf_merger::validation::Validator;
use std::fs;

use crate::common::{Workspace, page_widths, started_at};

fn merged(outcome: RunOutcome) -> MergeSuccess {
    match outcome {
        RunOutcome::Merged {
            result: MergeResult::Success(success),
        } => success,
        other => panic!("expected a successful merge, got {other:?}"),
    }
}

#[test]
fn test_merge_orders_case_insensitively() {
    let workspace = Workspace::new();
    workspace.add_pdf("B.pdf", 2, 200.0);
    workspace.add_pdf("a.pdf", 1, 100.0);
    workspace.add_pdf("C.pdf", 3, 300.0);

    let success = merged(run_at(&workspace.config, started_at(0)));

    let order: Vec<&str> = success.file_info.iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(order, vec!["a.pdf", "B.pdf", "C.pdf"]);
    assert_eq!(success.total_pages, 6);
    assert_eq!(success.total_files, 3);
    assert_eq!(
        page_widths(&success.output_path),
        vec![100.0, 200.0, 200.0, 300.0, 300.0, 300.0]
    );
}

#[test]
fn test_merge_output_name_and_size() {
    let workspace = Workspace::new();
    workspace.add_pdf("one.pdf", 1, 100.0);
    workspace.add_pdf("two.pdf", 1, 100.0);

    let success = merged(run_at(&workspace.config, started_at(7)));

    assert_eq!(
        workspace.output_entries(),
        vec!["merged_pdf_20250314_150907.pdf".to_string()]
    );
    assert_eq!(
        success.output_size,
        fs::metadata(&success.output_path).unwrap().len()
    );
    assert!(success.output_size > 0);
}

#[test]
fn test_reruns_produce_distinct_identical_outputs() {
    let workspace = Workspace::new();
    workspace.add_pdf("x.pdf", 2, 100.0);
    workspace.add_pdf("y.pdf", 3, 200.0);

    let first = merged(run_at(&workspace.config, started_at(1)));
    let second = merged(run_at(&workspace.config, started_at(2)));

    assert_ne!(first.output_path, second.output_path);
    assert_eq!(first.total_pages, second.total_pages);
    assert_eq!(first.file_info, second.file_info);
    assert_eq!(
        page_widths(&first.output_path),
        page_widths(&second.output_path)
    );
    assert_eq!(workspace.output_entries().len(), 2);
}

#[test]
fn test_single_file_is_copied_verbatim() {
    let workspace = Workspace::new();
    let source = workspace.add_pdf("Lonely.pdf", 4, 100.0);
    workspace.add_file("notes.txt", b"not a candidate");

    let outcome = run_at(&workspace.config, started_at(0));

    let RunOutcome::Copied { output_path, file_size, .. } = outcome else {
        panic!("expected a copy");
    };
    assert_eq!(workspace.output_entries(), vec!["Lonely.pdf".to_string()]);
    assert_eq!(fs::read(&source).unwrap(), fs::read(&output_path).unwrap());
    assert_eq!(file_size, fs::metadata(&source).unwrap().len());
}

#[cfg(unix)]
#[test]
fn test_read_only_single_file_is_copied() {
    use std::os::unix::fs::PermissionsExt;

    let workspace = Workspace::new();
    let source = workspace.add_pdf("readonly.pdf", 2, 100.0);
    fs::set_permissions(&source, fs::Permissions::from_mode(0o444)).unwrap();

    let outcome = run_at(&workspace.config, started_at(0));

    let RunOutcome::Copied { output_path, .. } = outcome else {
        panic!("expected a copy");
    };
    assert_eq!(workspace.output_entries(), vec!["readonly.pdf".to_string()]);
    assert_eq!(fs::read(&source).unwrap(), fs::read(&output_path).unwrap());
}

#[test]
fn test_file_broken_between_discovery_and_merge() {
    let workspace = Workspace::new();
    workspace.add_pdf("1.pdf", 2, 100.0);
    let fragile = workspace.add_pdf("2.pdf", 5, 200.0);
    workspace.add_pdf("3.pdf", 1, 300.0);

    let documents =
        sort_documents(discover_documents(&workspace.config.input_dir, &Validator::new()).unwrap());
    assert_eq!(documents.len(), 3);

    fs::write(&fragile, b"%PDF-1.5 truncated").unwrap();
    fs::create_dir_all(&workspace.config.output_dir).unwrap();
    let output = workspace.config.output_dir.join("merged.pdf");

    let result = Merger::new().merge(&documents, &output).unwrap();

    let MergeResult::Success(success) = result else {
        panic!("expected a successful merge");
    };
    assert_eq!(success.total_pages, 3);
    assert_eq!(success.failed_files.len(), 1);
    assert_eq!(success.failed_files[0].filename, "2.pdf");
    assert!(!success.file_info.iter().any(|f| f.filename == "2.pdf"));
    assert_eq!(page_widths(&output), vec![100.0, 100.0, 300.0]);
}

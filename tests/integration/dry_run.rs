//! Integration tests for dry-run functionality.

use pdf_merger::pipeline::{PlannedAction, RunOutcome, run_at};

use crate::common::{Workspace, started_at};

#[test]
fn test_dry_run_does_not_create_output() {
    let mut workspace = Workspace::new();
    workspace.config.dry_run = true;
    workspace.add_pdf("b.pdf", 2, 100.0);
    workspace.add_pdf("A.pdf", 3, 100.0);

    let outcome = run_at(&workspace.config, started_at(30));

    let RunOutcome::Planned { plan } = outcome else {
        panic!("expected a plan");
    };
    assert_eq!(plan.action, PlannedAction::Merge);
    assert_eq!(plan.total_pages, 5);
    assert!(plan.output_path.ends_with("merged_pdf_20250314_150930.pdf"));
    let order: Vec<&str> = plan.files.iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(order, vec!["A.pdf", "b.pdf"]);
    assert!(workspace.output_entries().is_empty());
}

#[test]
fn test_dry_run_single_file_plans_copy() {
    let mut workspace = Workspace::new();
    workspace.config.dry_run = true;
    workspace.add_pdf("only.pdf", 2, 100.0);

    let outcome = run_at(&workspace.config, started_at(0));

    let RunOutcome::Planned { plan } = outcome else {
        panic!("expected a plan");
    };
    assert_eq!(plan.action, PlannedAction::Copy);
    assert!(plan.output_path.ends_with("only.pdf"));
    assert!(workspace.output_entries().is_empty());
}

#[test]
fn test_dry_run_outcome_as_json() {
    let mut workspace = Workspace::new();
    workspace.config.dry_run = true;
    workspace.add_pdf("x.pdf", 1, 100.0);
    workspace.add_pdf("y.pdf", 4, 100.0);

    let outcome = run_at(&workspace.config, started_at(0));
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["outcome"], "planned");
    assert_eq!(json["plan"]["action"], "merge");
    assert_eq!(json["plan"]["totalPages"], 5);
    assert_eq!(json["plan"]["files"][1]["filename"], "y.pdf");
}

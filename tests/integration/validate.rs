//! Integration tests for `cursus validate`.

use cursus_cli::test_utils::CurriculumBuilder;
use cursus_cli::test_utils::fixtures::{CONFLICTING_CURRICULUM, LICENCE_CURRICULUM};

use crate::common::TestProject;

#[test]
fn test_validate_clean_document() {
    let project = TestProject::new().unwrap();
    project.write_curriculum(LICENCE_CURRICULUM).unwrap();

    let output = project.run_cursus(&["validate"]).unwrap();
    output.assert_success().assert_stdout_contains("is consistent (5 courses)");
    assert!(output.warnings().is_empty());
}

#[test]
fn test_validate_reports_each_issue_once() {
    let project = TestProject::new().unwrap();
    project.write_curriculum(CONFLICTING_CURRICULUM).unwrap();

    let output = project.run_cursus(&["validate"]).unwrap();
    output.assert_success().assert_stdout_contains("2 issue(s) found");
    assert_eq!(output.warnings().len(), 2);
}

#[test]
fn test_validate_strict_exits_with_error() {
    let project = TestProject::new().unwrap();
    project.write_curriculum(CONFLICTING_CURRICULUM).unwrap();

    let output = project.run_cursus(&["validate", "--strict"]).unwrap();
    output
        .assert_failure()
        .assert_stderr_contains("error: Validation found 2 issue(s)");
}

#[test]
fn test_re_export_is_not_reported() {
    let project = TestProject::new().unwrap();
    let xml = CurriculumBuilder::new()
        .course("A", "S1", "k", "")
        .course("B", "S2", "k", "k")
        .build();
    project.write_curriculum(&xml).unwrap();

    let output = project.run_cursus(&["validate", "--strict"]).unwrap();
    output.assert_success();
}

#[test]
fn test_conflict_lists_only_originating_courses() {
    let project = TestProject::new().unwrap();
    let xml = CurriculumBuilder::new()
        .course("A", "S1", "k", "")
        .course("B", "S2", "k", "k")
        .course("C", "S3", "k", "")
        .build();
    project.write_curriculum(&xml).unwrap();

    let output = project.run_cursus(&["validate"]).unwrap();
    assert_eq!(
        output.warnings(),
        vec!["warning: concept k is declared as new by [A[S1], C[S3]]"]
    );
}

#[test]
fn test_validate_json_report() {
    let project = TestProject::new().unwrap();
    let xml = CurriculumBuilder::new()
        .course("A", "S1", "recursion", "")
        .course("B", "S2", "", "recursoin")
        .build();
    project.write_curriculum(&xml).unwrap();

    let output = project.run_cursus(&["validate", "--format", "json"]).unwrap();
    output.assert_success();

    let report: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(report["valid"], false);
    assert_eq!(report["courses"], 2);
    assert_eq!(report["issues"][0]["kind"], "undefined-dependency");
    assert_eq!(
        report["issues"][0]["message"],
        "no concept recursoin defined for course B[S2] (did you mean recursion?)"
    );
}

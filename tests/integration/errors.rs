//! Fatal ingestion errors: the run stops before anything is written.

use cursus_cli::test_utils::CurriculumBuilder;

use crate::common::TestProject;

fn assert_fails_without_output(project: &TestProject, expected: &str) {
    let output = project.run_cursus(&["generate"]).unwrap();
    output.assert_failure().assert_stderr_contains(expected);
    assert!(output.warnings().is_empty());
    assert!(!project.file_exists("cursus.mmd"));
}

#[test]
fn test_missing_input() {
    let project = TestProject::new().unwrap();
    assert_fails_without_output(&project, "Curriculum document not found");
}

#[test]
fn test_invalid_semester() {
    let project = TestProject::new().unwrap();
    let xml = CurriculumBuilder::new().course("A", "S10", "x", "").build();
    project.write_curriculum(&xml).unwrap();
    assert_fails_without_output(&project, "Invalid semester 'S10'");
}

#[test]
fn test_unknown_element() {
    let project = TestProject::new().unwrap();
    project
        .write_curriculum(
            "<cursus><course title=\"A\"><semester>S1</semester><teacher>Bob</teacher></course></cursus>",
        )
        .unwrap();
    assert_fails_without_output(&project, "Unknown element <teacher>");
}

#[test]
fn test_missing_field() {
    let project = TestProject::new().unwrap();
    project
        .write_curriculum(
            "<cursus><course title=\"A\"><semester>S1</semester><new-concept>x</new-concept></course></cursus>",
        )
        .unwrap();
    assert_fails_without_output(&project, "Missing dependency-concept for course A");
}

#[test]
fn test_malformed_document() {
    let project = TestProject::new().unwrap();
    project.write_curriculum("<cursus><course title=\"A\"></cursus>").unwrap();
    assert_fails_without_output(&project, "Malformed curriculum document");
}

#[test]
fn test_error_in_late_course_aborts_everything() {
    let project = TestProject::new().unwrap();
    let xml = CurriculumBuilder::new()
        .course("A", "S1", "k", "")
        .course("B", "S1", "k", "missing")
        .course("C", "S0", "", "")
        .build();
    project.write_curriculum(&xml).unwrap();

    // Ingestion fails before validation, so no warning precedes the error.
    assert_fails_without_output(&project, "Invalid semester 'S0'");
}

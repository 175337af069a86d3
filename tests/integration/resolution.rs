//! Prerequisite resolution observed through the generated diagram.
//!
//! Edges are read back from the Mermaid output, so these tests pin the
//! resolution rules and the rendering contract together.

use cursus_cli::test_utils::CurriculumBuilder;

use crate::common::TestProject;

/// Generate to stdout and return the edge lines.
fn edges(builder: &CurriculumBuilder) -> Vec<String> {
    let project = TestProject::new().unwrap();
    project.write_curriculum(&builder.build()).unwrap();

    let output = project.run_cursus(&["generate", "--stdout"]).unwrap();
    output.assert_success();
    output.stdout.lines().filter(|line| line.contains("-->")).map(str::to_string).collect()
}

#[test]
fn test_nearest_semester_wins() {
    let builder = CurriculumBuilder::new()
        .course("X", "S1", "k", "")
        .course("Y", "S3", "k", "")
        .course("Z", "S5", "", "k");

    assert_eq!(edges(&builder), vec!["id1 --k--> id2"]);
}

#[test]
fn test_same_semester_fallback() {
    let builder = CurriculumBuilder::new()
        .course("Z", "S2", "", "k")
        .course("Y", "S2", "k", "");

    assert_eq!(edges(&builder), vec!["id1 --k--> id0"]);
}

#[test]
fn test_fan_in_from_every_introducer() {
    let builder = CurriculumBuilder::new()
        .course("M", "S2", "k", "")
        .course("N", "S2", "k", "")
        .course("D", "S3", "", "k");

    assert_eq!(edges(&builder), vec!["id0 --k--> id2", "id1 --k--> id2"]);
}

#[test]
fn test_concepts_collapse_into_one_edge() {
    let builder = CurriculumBuilder::new()
        .course("P", "S1", "k1, k2", "")
        .course("D", "S2", "", "k2, k1");

    assert_eq!(edges(&builder), vec!["id0 --k2,k1--> id1"]);
}

#[test]
fn test_later_semester_concept_is_dropped_silently() {
    let project = TestProject::new().unwrap();
    let xml = CurriculumBuilder::new()
        .course("Early", "S1", "", "k")
        .course("Late", "S4", "k", "")
        .build();
    project.write_curriculum(&xml).unwrap();

    let output = project.run_cursus(&["generate", "--stdout"]).unwrap();
    output.assert_success();
    assert!(!output.stdout.contains("-->"));
    assert!(output.warnings().is_empty());
}

#[test]
fn test_identical_courses_stay_distinct() {
    let builder = CurriculumBuilder::new()
        .course("TP", "S1", "k", "")
        .course("TP", "S1", "k", "")
        .course("D", "S2", "", "k");

    assert_eq!(edges(&builder), vec!["id0 --k--> id2", "id1 --k--> id2"]);
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let project = TestProject::new().unwrap();
    let xml = CurriculumBuilder::new()
        .course("Réseaux", "S3", "tcp, udp", "socket")
        .course("Systèmes", "S2", "socket, processus", "")
        .course("Sécurité", "S4", "tls", "tcp, processus")
        .course("Projet", "S4", "", "tls, udp, socket")
        .build();
    project.write_curriculum(&xml).unwrap();

    let first = project.run_cursus(&["generate", "--stdout"]).unwrap();
    let second = project.run_cursus(&["generate", "--stdout"]).unwrap();
    first.assert_success();
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.stderr, second.stderr);
}

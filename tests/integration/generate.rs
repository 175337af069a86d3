//! Integration tests for `cursus generate`.

use cursus_cli::test_utils::fixtures::{CONFLICTING_CURRICULUM, LICENCE_CURRICULUM};

use crate::common::TestProject;

const LICENCE_DIAGRAM: &str = "flowchart LR
subgraph S1
  id0(Programmation)
end S1
subgraph S2
  id1(Logique)
  id2(Algorithmique)
end S2
subgraph S4
  id3(Automates)
end S4
subgraph S5
  id4(Compilation)
end S5

id0 --boucle,variable--> id2
id1 --ensemble--> id3
id3 --automate,grammaire--> id4
id2 --tri--> id4
";

#[test]
fn test_generate_writes_default_output() {
    let project = TestProject::new().unwrap();
    project.write_curriculum(LICENCE_CURRICULUM).unwrap();

    let output = project.run_cursus(&["generate"]).unwrap();
    output.assert_success().assert_stdout_contains("cursus.mmd generated");
    assert!(output.warnings().is_empty());

    assert_eq!(project.read_file("cursus.mmd").unwrap(), LICENCE_DIAGRAM);
}

#[test]
fn test_generate_to_stdout_writes_no_file() {
    let project = TestProject::new().unwrap();
    project.write_curriculum(LICENCE_CURRICULUM).unwrap();

    let output = project.run_cursus(&["generate", "--stdout"]).unwrap();
    output.assert_success();
    assert_eq!(output.stdout, LICENCE_DIAGRAM);
    assert!(!project.file_exists("cursus.mmd"));
}

#[test]
fn test_generate_custom_paths_and_direction() {
    let project = TestProject::new().unwrap();
    project.write_file("data/licence.xml", LICENCE_CURRICULUM).unwrap();

    let output = project
        .run_cursus(&[
            "generate",
            "--input",
            "data/licence.xml",
            "--output",
            "docs/graph.mmd",
            "--direction",
            "TB",
        ])
        .unwrap();
    output.assert_success();

    let diagram = project.read_file("docs/graph.mmd").unwrap();
    assert!(diagram.starts_with("flowchart TB\n"));
}

#[test]
fn test_generate_prints_warnings_and_continues() {
    let project = TestProject::new().unwrap();
    project.write_curriculum(CONFLICTING_CURRICULUM).unwrap();

    let output = project.run_cursus(&["generate"]).unwrap();
    output.assert_success();
    assert_eq!(
        output.warnings(),
        vec![
            "warning: concept k is declared as new by [A[S1], B[S2]]",
            "warning: no concept pile defined for course C[S2]",
        ]
    );
    assert!(project.file_exists("cursus.mmd"));
}

#[test]
fn test_quiet_suppresses_warnings_and_summary() {
    let project = TestProject::new().unwrap();
    project.write_curriculum(CONFLICTING_CURRICULUM).unwrap();

    let output = project.run_cursus(&["--quiet", "generate"]).unwrap();
    output.assert_success();
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
    assert!(project.file_exists("cursus.mmd"));
}

#[test]
fn test_generate_json_format() {
    let project = TestProject::new().unwrap();
    project.write_curriculum(LICENCE_CURRICULUM).unwrap();

    let output = project.run_cursus(&["generate", "--format", "json", "--stdout"]).unwrap();
    output.assert_success();

    let document: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    let semesters = document["semesters"].as_array().unwrap();
    assert_eq!(semesters.len(), 4);
    assert_eq!(semesters[1]["semester"], "S2");
    assert_eq!(semesters[1]["courses"][1]["title"], "Algorithmique");

    let edges = document["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[2]["from"], "id3");
    assert_eq!(edges[2]["to"], "id4");
    assert_eq!(edges[2]["concepts"], serde_json::json!(["automate", "grammaire"]));
}

#[test]
fn test_empty_curriculum_renders_header_only() {
    let project = TestProject::new().unwrap();
    project.write_curriculum("<cursus/>").unwrap();

    let output = project.run_cursus(&["generate", "--stdout"]).unwrap();
    output.assert_success();
    assert_eq!(output.stdout, "flowchart LR\n\n");
}

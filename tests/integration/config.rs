//! Integration tests for `cursus.toml` handling.

use cursus_cli::test_utils::fixtures::SMALL_CURRICULUM;

use crate::common::TestProject;

#[test]
fn test_config_file_sets_paths_and_layout() {
    let project = TestProject::new().unwrap();
    project.write_file("data/small.xml", SMALL_CURRICULUM).unwrap();
    project
        .write_config(
            r#"
input = "data/small.xml"
output = "out/small.mmd"
direction = "RL"
id_prefix = "c"
"#,
        )
        .unwrap();

    let output = project.run_cursus(&["generate"]).unwrap();
    output.assert_success().assert_stdout_contains("small.mmd generated");

    let diagram = project.read_file("out/small.mmd").unwrap();
    assert!(diagram.starts_with("flowchart RL\n"));
    assert!(diagram.contains("  c0(Programmation)\n"));
    assert!(diagram.ends_with("c0 --variable--> c1\n"));
}

#[test]
fn test_flags_override_config() {
    let project = TestProject::new().unwrap();
    project.write_curriculum(SMALL_CURRICULUM).unwrap();
    project.write_config("direction = \"RL\"\n").unwrap();

    let output = project.run_cursus(&["generate", "--direction", "BT", "--stdout"]).unwrap();
    output.assert_success();
    assert!(output.stdout.starts_with("flowchart BT\n"));
}

#[test]
fn test_explicit_config_path() {
    let project = TestProject::new().unwrap();
    project.write_curriculum(SMALL_CURRICULUM).unwrap();
    project.write_file("conf/alt.toml", "input = \"../cursus.xml\"\ndirection = \"TB\"\n").unwrap();

    let output = project.run_cursus(&["--config", "conf/alt.toml", "generate", "--stdout"]).unwrap();
    output.assert_success();
    assert!(output.stdout.starts_with("flowchart TB\n"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let project = TestProject::new().unwrap();
    project.write_curriculum(SMALL_CURRICULUM).unwrap();

    let output = project.run_cursus(&["--config", "absent.toml", "generate"]).unwrap();
    output.assert_failure().assert_stderr_contains("absent.toml does not exist");
    assert!(!project.file_exists("cursus.mmd"));
}

#[test]
fn test_unknown_config_key_fails() {
    let project = TestProject::new().unwrap();
    project.write_curriculum(SMALL_CURRICULUM).unwrap();
    project.write_config("ouput = \"x.mmd\"\n").unwrap();

    let output = project.run_cursus(&["generate"]).unwrap();
    output.assert_failure().assert_stderr_contains("Configuration error");
}

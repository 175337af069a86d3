//! Integration tests for `cursus tree`.

use assert_cmd::Command;
use cursus_cli::test_utils::CurriculumBuilder;
use cursus_cli::test_utils::fixtures::LICENCE_CURRICULUM;
use predicates::prelude::*;

use crate::common::TestProject;

fn cursus(project: &TestProject) -> Command {
    let mut cmd = Command::cargo_bin("cursus").unwrap();
    cmd.current_dir(project.project_path())
        .env("NO_COLOR", "1")
        .env_remove("CURSUS_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_tree_prerequisites() {
    let project = TestProject::new().unwrap();
    project.write_curriculum(LICENCE_CURRICULUM).unwrap();

    cursus(&project).args(["tree", "Compilation"]).assert().success().stdout(
        "Compilation[S5]
├── Automates[S4] (automate, grammaire)
│   └── Logique[S2] (ensemble)
└── Algorithmique[S2] (tri)
    └── Programmation[S1] (boucle, variable)

4 transitive prerequisites
",
    );
}

#[test]
fn test_tree_depth_limit() {
    let project = TestProject::new().unwrap();
    project.write_curriculum(LICENCE_CURRICULUM).unwrap();

    cursus(&project)
        .args(["tree", "Compilation", "--depth", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Automates[S4]"))
        .stdout(predicate::str::contains("Logique").not());
}

#[test]
fn test_tree_inverted() {
    let project = TestProject::new().unwrap();
    project.write_curriculum(LICENCE_CURRICULUM).unwrap();

    cursus(&project)
        .args(["tree", "Programmation", "--invert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("└── Algorithmique[S2] (boucle, variable)"))
        .stdout(predicate::str::contains("Compilation[S5] (tri)"))
        .stdout(predicate::str::contains("2 transitive dependents"));
}

#[test]
fn test_tree_unknown_course_suggests_title() {
    let project = TestProject::new().unwrap();
    project.write_curriculum(LICENCE_CURRICULUM).unwrap();

    cursus(&project)
        .args(["tree", "Compilaton"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Course 'Compilaton' not found"))
        .stderr(predicate::str::contains("Did you mean: Compilation?"));
}

#[test]
fn test_tree_shared_title_needs_semester() {
    let project = TestProject::new().unwrap();
    let xml = CurriculumBuilder::new()
        .course("Programmation", "S1", "variable", "")
        .course("Projet", "S2", "", "variable")
        .course("Projet", "S4", "", "variable")
        .build();
    project.write_curriculum(&xml).unwrap();

    cursus(&project)
        .args(["tree", "Projet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("found in S2, S4"))
        .stderr(predicate::str::contains("--semester"));

    cursus(&project)
        .args(["tree", "Projet", "--semester", "s4"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Projet[S4]\n└── Programmation[S1] (variable)\n"));
}

#[test]
fn test_tree_marks_self_loop_as_repeated() {
    let project = TestProject::new().unwrap();
    let xml = CurriculumBuilder::new().course("Solo", "S1", "k", "k").build();
    project.write_curriculum(&xml).unwrap();

    cursus(&project)
        .args(["tree", "Solo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("└── Solo[S1] (k) (*)"))
        .stdout(predicate::str::contains("1 transitive prerequisites"));
}

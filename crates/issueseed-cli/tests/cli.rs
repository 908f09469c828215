// SPDX-License-Identifier: Apache-2.0

// Integration tests for the issueseed binary.
//
// Every run that could reach GitHub uses --dry-run; the rest fail during
// setup, before a client is used.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const TASKS_CSV: &str = "Semana,Id Aluno,SQUAD,Tarefa,IA\n1,42,A,Setup,\n2,43,B,Layout,COMIA\n";

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Base command isolated from the user's config and log filter.
fn issueseed(config_home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("issueseed");
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG")
        .env_remove("ISSUESEED_LABELS__COLOR")
        .env_remove("ISSUESEED_DEFAULTS__TASK_TYPE");
    cmd
}

#[test]
fn help_lists_flags() {
    let dir = TempDir::new().unwrap();

    issueseed(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--repo"))
        .stdout(predicate::str::contains("--token"))
        .stdout(predicate::str::contains("--excel"))
        .stdout(predicate::str::contains("--students"))
        .stdout(predicate::str::contains("--ia-default"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn missing_required_flags_fail() {
    let dir = TempDir::new().unwrap();

    issueseed(dir.path())
        .args(["--repo", "turma/web"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--token"));
}

#[test]
fn missing_spreadsheet_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nada.xlsx");

    issueseed(dir.path())
        .args(["--repo", "turma/web", "--token", "dummy", "--excel"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Spreadsheet not found"))
        .stderr(predicate::str::contains("nada.xlsx"));
}

#[test]
fn missing_column_fails_and_names_it() {
    let dir = TempDir::new().unwrap();
    let sheet = write_file(&dir, "tarefas.csv", "Semana,Id Aluno,Tarefa\n1,42,Setup\n");

    issueseed(dir.path())
        .args(["--repo", "turma/web", "--token", "dummy", "--excel"])
        .arg(&sheet)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required columns: SQUAD"));
}

#[test]
fn malformed_repo_fails() {
    let dir = TempDir::new().unwrap();
    let sheet = write_file(&dir, "tarefas.csv", TASKS_CSV);

    issueseed(dir.path())
        .args([
            "--repo",
            "turma-web",
            "--token",
            "dummy",
            "--dry-run",
            "--excel",
        ])
        .arg(&sheet)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid repository 'turma-web'"));
}

#[test]
fn malformed_mapping_fails() {
    let dir = TempDir::new().unwrap();
    let sheet = write_file(&dir, "tarefas.csv", TASKS_CSV);
    let students = write_file(&dir, "students.yml", "mappings: [unclosed\n");

    issueseed(dir.path())
        .args([
            "--repo",
            "turma/web",
            "--token",
            "dummy",
            "--dry-run",
            "--excel",
        ])
        .arg(&sheet)
        .arg("--students")
        .arg(&students)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load student mapping"));
}

#[test]
fn dry_run_prints_composed_issues() {
    let dir = TempDir::new().unwrap();
    let sheet = write_file(&dir, "tarefas.csv", TASKS_CSV);
    let students = write_file(
        &dir,
        "students.yml",
        "mappings:\n  \"42\":\n    login: octocat\n",
    );

    issueseed(dir.path())
        .args([
            "--repo",
            "turma/web",
            "--token",
            "dummy",
            "--dry-run",
            "--excel",
        ])
        .arg(&sheet)
        .arg("--students")
        .arg(&students)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[Semana 1] Setup (42 - Squad A - SEMIA)",
        ))
        .stdout(predicate::str::contains(
            "[Semana 2] Layout (43 - Squad B - COMIA)",
        ))
        .stdout(predicate::str::contains("octocat"))
        .stdout(predicate::str::contains("Previewed:  2"));
}

#[test]
fn ia_default_applies_to_rows_without_type() {
    let dir = TempDir::new().unwrap();
    let sheet = write_file(&dir, "tarefas.csv", TASKS_CSV);

    issueseed(dir.path())
        .args([
            "--repo",
            "turma/web",
            "--token",
            "dummy",
            "--dry-run",
            "--ia-default",
            "comia",
            "--excel",
        ])
        .arg(&sheet)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[Semana 1] Setup (42 - Squad A - COMIA)",
        ));
}

#[test]
fn dry_run_json_is_parseable() {
    let dir = TempDir::new().unwrap();
    let sheet = write_file(&dir, "tarefas.csv", TASKS_CSV);

    let output = issueseed(dir.path())
        .args([
            "--repo",
            "turma/web",
            "--token",
            "dummy",
            "--dry-run",
            "-o",
            "json",
            "--excel",
        ])
        .arg(&sheet)
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["repository"], "turma/web");
    assert_eq!(value["dry_run"], true);
    assert_eq!(value["previewed"], 2);
    assert_eq!(value["issues"][0]["outcome"]["status"], "dry_run");
    assert_eq!(
        value["issues"][0]["issue"]["labels"],
        serde_json::json!(["tarefa", "Semana:1", "SQUAD:A", "IdAluno:42", "IA:SEMIA"])
    );
}

#[test]
fn config_file_sets_default_task_type() {
    let dir = TempDir::new().unwrap();
    let sheet = write_file(&dir, "tarefas.csv", TASKS_CSV);
    fs::create_dir_all(dir.path().join("issueseed")).unwrap();
    fs::write(
        dir.path().join("issueseed").join("config.toml"),
        "[defaults]\ntask_type = \"COMIA\"\n",
    )
    .unwrap();

    issueseed(dir.path())
        .args([
            "--repo",
            "turma/web",
            "--token",
            "dummy",
            "--dry-run",
            "--excel",
        ])
        .arg(&sheet)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[Semana 1] Setup (42 - Squad A - COMIA)",
        ));
}

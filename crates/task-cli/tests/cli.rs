//! Binary-level tests: messages, streams and exit codes.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn task_cli(dir: &Path, backend: &str) -> Command {
    let file = if backend == "sqlite" { "tasks.db" } else { "tasks.json" };
    let mut cmd = Command::cargo_bin("task-cli").expect("binary should build");
    cmd.current_dir(dir)
        .env_remove("TASK_CLI_LOG")
        .env_remove("TASK_CLI_STORAGE__BACKEND")
        .env_remove("TASK_CLI_GENERAL__DEFAULT_FORMAT")
        .args(["--backend", backend, "--path"])
        .arg(dir.join(file));
    cmd
}

#[test]
fn add_then_list_prints_record_cards() {
    for backend in ["json", "sqlite"] {
        let dir = TempDir::new().unwrap();

        task_cli(dir.path(), backend)
            .args(["add", "Write report"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Task was added successfully.\n"))
            .stdout(predicate::str::contains("| ID:           1"))
            .stdout(predicate::str::contains("| Status:       TODO"))
            .stdout(predicate::str::contains("| Updated at:   Never"));

        task_cli(dir.path(), backend)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("| Description:  Write report"));
    }
}

#[test]
fn empty_list_says_so() {
    let dir = TempDir::new().unwrap();
    task_cli(dir.path(), "json")
        .arg("list")
        .assert()
        .success()
        .stdout("No tasks to show.\n");
}

#[test]
fn missing_task_exits_three_with_message_on_stderr() {
    let dir = TempDir::new().unwrap();
    task_cli(dir.path(), "json")
        .args(["mark-done", "42"])
        .assert()
        .code(3)
        .stdout("")
        .stderr(predicate::str::contains("Task with id 42 was not found."));
}

#[test]
fn bad_due_date_exits_four() {
    let dir = TempDir::new().unwrap();
    task_cli(dir.path(), "json").args(["add", "Dated"]).assert().success();

    task_cli(dir.path(), "json")
        .args(["due", "1", "June first"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Invalid date format. Use YYYY-MM-DD."));
}

#[test]
fn usage_errors_exit_two() {
    let dir = TempDir::new().unwrap();
    task_cli(dir.path(), "json")
        .args(["delete", "not-a-number"])
        .assert()
        .code(2);
}

#[test]
fn json_format_is_machine_readable() {
    let dir = TempDir::new().unwrap();
    let output = task_cli(dir.path(), "sqlite")
        .args(["--format", "json", "add", "Structured"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["id"], 1);
    assert_eq!(parsed["status"], "todo");
}

#[test]
fn delete_reports_success_then_failure() {
    let dir = TempDir::new().unwrap();
    task_cli(dir.path(), "json").args(["add", "Doomed"]).assert().success();

    task_cli(dir.path(), "json")
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout("Task was deleted successfully.\n");

    task_cli(dir.path(), "json")
        .args(["delete", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Could not delete task."));
}

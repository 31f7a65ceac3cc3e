use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const MEMBERS: &str = r#"[
  {"id": "1", "name": "Aaron Miles", "email": "aaron@mailinator.com", "role": "member"},
  {"id": "2", "name": "Aishwarya Naik", "email": "aishwarya@mailinator.com", "role": "member"},
  {"id": "3", "name": "Arvind Kumar", "email": "arvind@mailinator.com", "role": "admin"},
  {"id": "4", "name": "Caterina Binotto", "email": "caterina@mailinator.com", "role": "member"},
  {"id": 5, "name": "Chetan Kumar", "email": "chetan@mailinator.com", "role": "member"}
]"#;

fn setup() -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = temp_dir.path().join("members.json");
    std::fs::write(&source, MEMBERS).unwrap();
    (temp_dir, source)
}

fn roster(temp_dir: &TempDir, source: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.env("ROSTER_HOME", temp_dir.path())
        .env_remove("RUST_LOG")
        .arg("--source")
        .arg(source);
    cmd
}

#[test]
fn test_list_shows_every_user() {
    let (temp_dir, source) = setup();

    roster(&temp_dir, &source)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aaron Miles"))
        .stdout(predicate::str::contains("Chetan Kumar"))
        .stdout(predicate::str::contains("5 users"));
}

#[test]
fn test_list_with_search() {
    let (temp_dir, source) = setup();

    roster(&temp_dir, &source)
        .args(["list", "-q", "Kumar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Arvind Kumar"))
        .stdout(predicate::str::contains("Chetan Kumar"))
        .stdout(predicate::str::contains("Aaron Miles").not())
        .stdout(predicate::str::contains("2 users"));
}

#[test]
fn test_list_fails_when_source_is_missing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("nope.json");

    roster(&temp_dir, &missing)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Network error"));
}

#[test]
fn test_list_rejects_malformed_payload() {
    let (temp_dir, source) = setup();
    std::fs::write(&source, "{\"users\": 1}").unwrap();

    roster(&temp_dir, &source)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Format error"));
}

#[test]
fn test_shell_empty_search_restores_deleted_row() {
    let (temp_dir, source) = setup();

    // An empty query resets to the list as fetched, so the deleted row comes back
    roster(&temp_dir, &source)
        .arg("shell")
        .write_stdin("delete 3 -y\nsearch\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"User deleted: Arvind Kumar[\s\S]*5 users").unwrap());
}

#[test]
fn test_shell_search_narrows_current_rows() {
    let (temp_dir, source) = setup();

    // A real query filters what is left, so the deleted Kumar stays gone
    roster(&temp_dir, &source)
        .arg("shell")
        .write_stdin("delete 3 -y\nsearch Kumar\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"User deleted: Arvind Kumar[\s\S]*1 user ·").unwrap())
        .stdout(predicate::str::contains("1 users").not());
}

#[test]
fn test_shell_delete_needs_confirmation() {
    let (temp_dir, source) = setup();

    roster(&temp_dir, &source)
        .arg("shell")
        .write_stdin("delete 3\nn\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Are you sure, you want to delete it?"))
        .stdout(predicate::str::contains("User deleted").not());
}

#[test]
fn test_shell_save_with_empty_name_is_refused() {
    let (temp_dir, source) = setup();

    roster(&temp_dir, &source)
        .arg("shell")
        .write_stdin("edit 1\nset name \"\"\nsave\ncancel -y\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please Input Name!"))
        .stdout(predicate::str::contains("User saved").not());
}

#[test]
fn test_shell_edit_and_save() {
    let (temp_dir, source) = setup();

    roster(&temp_dir, &source)
        .arg("shell")
        .write_stdin("edit 4\nset role admin\nsave\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("User saved: Caterina Binotto"));
}

#[test]
fn test_shell_bulk_delete() {
    let (temp_dir, source) = setup();

    roster(&temp_dir, &source)
        .arg("shell")
        .write_stdin("select 1 2\ndelete-selected\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 selected"))
        .stdout(predicate::str::contains("2 users deleted"));
}

#[test]
fn test_shell_paging() {
    let (temp_dir, source) = setup();

    roster(&temp_dir, &source)
        .args(["--page-size", "2", "shell"])
        .write_stdin("next\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("page 1 of 3"))
        .stdout(predicate::str::contains("page 2 of 3"));
}

#[test]
fn test_shell_unknown_command_keeps_running() {
    let (temp_dir, source) = setup();

    roster(&temp_dir, &source)
        .arg("shell")
        .write_stdin("frobnicate\nshow\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aaron Miles"));
}

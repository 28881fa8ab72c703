use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn jotz_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("jotz"));
    cmd.env("JOTZ_DATA_DIR", data_dir.as_os_str());
    cmd
}

fn create_note(data_dir: &Path, title: &str, content: &str) -> String {
    let output = jotz_cmd(data_dir)
        .args(["create", title, content])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    // First line of `create` output is the new note's id
    stdout.lines().next().unwrap().trim().to_string()
}

#[test]
fn test_note_lifecycle() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    jotz_cmd(dir)
        .args(["login", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as alice"));

    jotz_cmd(dir)
        .args(["whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"));

    let id = create_note(dir, "Shopping", "milk, eggs");

    jotz_cmd(dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shopping"));

    jotz_cmd(dir)
        .args(["search", "MILK"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shopping"));

    jotz_cmd(dir)
        .args(["edit", &id, "Groceries", "milk, eggs, bread"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note updated"));

    jotz_cmd(dir)
        .args(["view", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("milk, eggs, bread"));

    jotz_cmd(dir)
        .args(["delete", "-y", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note deleted"));

    jotz_cmd(dir)
        .args(["view", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note not found"));

    jotz_cmd(dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."));
}

#[test]
fn test_export_import_round_trip() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    let out = TempDir::new().unwrap();

    jotz_cmd(dir).args(["login", "alice"]).assert().success();
    let first = create_note(dir, "First", "alpha");
    create_note(dir, "Second", "beta");

    jotz_cmd(dir)
        .args(["export", "--out", out.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 notes"));

    let export_file = out.path().join("alice_notes.json");
    assert!(export_file.exists());

    jotz_cmd(dir).args(["delete", "-y", &first]).assert().success();

    jotz_cmd(dir)
        .args(["import", "-y", export_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 notes"));

    jotz_cmd(dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("First"))
        .stdout(predicate::str::contains("Second"));
}

#[test]
fn test_sessions_and_roster() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    jotz_cmd(dir).args(["login", "alice"]).assert().success();
    create_note(dir, "Alice note", "");

    // Switching users hides alice's notes but keeps her on the roster
    jotz_cmd(dir).args(["login", "bob"]).assert().success();
    jotz_cmd(dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."));

    jotz_cmd(dir)
        .args(["users"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("bob"));

    jotz_cmd(dir).args(["logout", "-y"]).assert().success();
    jotz_cmd(dir)
        .args(["whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in."));

    // Mutations require an active user
    jotz_cmd(dir)
        .args(["create", "Orphan", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No active user"));

    // Logging back in restores the collection
    jotz_cmd(dir).args(["login", "alice"]).assert().success();
    jotz_cmd(dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice note"));
}

#[test]
fn test_view_renders_markdown_as_html() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    jotz_cmd(dir).args(["login", "alice"]).assert().success();
    let id = create_note(dir, "Doc", "# Heading\n\n* item");

    jotz_cmd(dir)
        .args(["view", "--html", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Heading</h1>"))
        .stdout(predicate::str::contains("<li>item</li>"));
}

#[test]
fn test_rejects_malformed_import_payload() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    jotz_cmd(dir).args(["login", "alice"]).assert().success();

    let bad_file = temp.path().join("bad.json");
    std::fs::write(&bad_file, r#"[{"title":"no id or timestamps"}]"#).unwrap();

    jotz_cmd(dir)
        .args(["import", "-y", bad_file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}

#[test]
fn test_invalid_id_is_reported() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    jotz_cmd(dir).args(["login", "alice"]).assert().success();
    jotz_cmd(dir)
        .args(["view", "not-a-uuid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid note id"));
}

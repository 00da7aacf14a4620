/*!
 * Integration tests for the repo2md binary
 */

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn write_file(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn repo2md() -> Command {
    Command::cargo_bin("repo2md").unwrap()
}

#[test]
fn prints_tree_and_contents_to_stdout() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("src/main.rs"), "fn main() {}\n");
    write_file(&dir.path().join(".env"), "TOKEN=1\n");

    repo2md()
        .arg(dir.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Repository Structure"))
        .stdout(predicate::str::contains("  - 📁 src"))
        .stdout(predicate::str::contains("    - 📄 [main.rs](#src-main-rs)"))
        .stdout(predicate::str::contains("```rust\n1: fn main() {}\n```"))
        .stdout(predicate::str::contains(".env").not());
}

#[test]
fn writes_output_file_and_still_prints() {
    let dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("snapshot.md");
    write_file(&dir.path().join("app.py"), "print(1)\n");

    let assert = repo2md()
        .arg(dir.path())
        .args(["-o", out.to_str().unwrap(), "-q"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Repository structure saved to"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(stdout, format!("{}\n", written));
    assert!(written.contains("## app-py"));
}

#[test]
fn ignore_accepts_multiple_patterns() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("keep.py"), "");
    write_file(&dir.path().join("drop.py"), "");
    write_file(&dir.path().join("gen/out.js"), "");

    repo2md()
        .arg(dir.path())
        .args(["--ignore", "drop.py", "gen", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keep.py"))
        .stdout(predicate::str::contains("drop.py").not())
        .stdout(predicate::str::contains("📁 gen").not());
}

#[test]
fn show_hidden_lists_dotfiles() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join(".github/ci.yaml"), "on: push\n");

    repo2md()
        .arg(dir.path())
        .args(["--show-hidden", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  - 📁 .github"))
        .stdout(predicate::str::contains("[ci.yaml](#github-ci-yaml)"))
        .stdout(predicate::str::contains("```yaml"));
}

#[test]
fn no_contents_emits_tree_only() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("lib.rs"), "pub fn f() {}\n");

    repo2md()
        .arg(dir.path())
        .args(["--no-contents", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[lib.rs](#lib-rs)"))
        .stdout(predicate::str::contains("# File Contents").not());
}

#[test]
fn missing_root_fails() {
    let dir = tempdir().unwrap();

    repo2md()
        .arg(dir.path().join("nope"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: "))
        .stderr(predicate::str::contains("Target directory not found"));
}

#[test]
fn rust_log_enables_debug_events_without_verbose() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("a.rs"), "");

    repo2md()
        .env("RUST_LOG", "debug")
        .arg(dir.path())
        .arg("-q")
        .assert()
        .success()
        .stderr(predicate::str::contains("scanning directory"));
}

#[test]
fn default_log_level_hides_debug_events() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("a.rs"), "");

    repo2md()
        .env_remove("RUST_LOG")
        .arg(dir.path())
        .arg("-q")
        .assert()
        .success()
        .stderr(predicate::str::contains("scanning directory").not());

    repo2md()
        .env_remove("RUST_LOG")
        .arg(dir.path())
        .args(["-q", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("scanning directory"));
}

#[test]
fn list_languages_needs_no_path() {
    repo2md()
        .arg("--list-languages")
        .assert()
        .success()
        .stdout(predicate::str::contains(".rs"))
        .stdout(predicate::str::contains("powershell"));
}

#[test]
fn summary_report_goes_to_stderr() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("a.go"), "package a\n");

    repo2md()
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("MARKDOWN GENERATED"))
        .stdout(predicate::str::contains("MARKDOWN GENERATED").not());
}

use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use tempfile::tempdir;

const SOURCE: &str = "# Guide\n\n## Install\n\nSome [docs](/wiki/en/Install).\n";

fn write_doc(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("doc.md");
    fs::write(&path, SOURCE).unwrap();
    path
}

#[test]
fn summary_is_the_default_view() {
    let dir = tempdir().unwrap();
    let input = write_doc(&dir);

    let mut cmd = Command::cargo_bin("treemark").unwrap();
    cmd.arg(input.as_os_str());

    cmd.assert()
        .success()
        .stdout(contains("\"title\": \"Guide\""))
        .stdout(contains("\"slug\": \"install\""));
}

#[test]
fn tree_view_shows_injected_classes() {
    let dir = tempdir().unwrap();
    let input = write_doc(&dir);

    let mut cmd = Command::cargo_bin("treemark").unwrap();
    cmd.arg(input.as_os_str()).arg("tree-json");

    cmd.assert()
        .success()
        .stdout(contains("md__link"))
        .stdout(contains("\"id\": \"install\""));
}

#[test]
fn list_views_names_every_view() {
    let mut cmd = Command::cargo_bin("treemark").unwrap();
    cmd.arg("--list-views");

    cmd.assert()
        .success()
        .stdout(contains("summary-json"))
        .stdout(contains("toc-json"))
        .stdout(contains("tree-json"));
}

#[test]
fn missing_files_fail_with_a_message() {
    let mut cmd = Command::cargo_bin("treemark").unwrap();
    cmd.arg("no-such-file.md");

    cmd.assert()
        .failure()
        .stderr(contains("Failed to read no-such-file.md"));
}

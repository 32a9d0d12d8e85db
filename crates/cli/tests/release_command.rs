use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn relwatch(home: &Path, repo: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("relwatch"));
    cmd.env("XDG_CONFIG_HOME", home)
        .env_remove("RUST_LOG")
        .args(["--offline", "--repo-path"])
        .arg(repo);
    cmd
}

#[test]
fn release_lists_entries_sorted_by_date() {
    let tmp = tempdir().unwrap();
    let repo = tmp.path().join("repo");
    write_file(
        &repo.join("changelog/release-6-4-21-0/2023-02-10-fix-search.md"),
        "---\ntitle: Improve search\n---\nSearch is faster.",
    );
    write_file(
        &repo.join("changelog/release-6-4-21-0/2023-01-20-fix-cart.md"),
        "---\ntitle: Fix cart\n---\nCart fix.",
    );

    let output = relwatch(tmp.path(), &repo)
        .args(["release", "6.4.21.0", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let titles: Vec<&str> =
        json.as_array().unwrap().iter().map(|e| e["title"].as_str().unwrap()).collect();
    assert_eq!(titles, ["Fix cart", "Improve search"]);
}

#[test]
fn release_unknown_version_fails() {
    let tmp = tempdir().unwrap();
    let repo = tmp.path().join("repo");
    fs::create_dir_all(repo.join("changelog/release-6-4-21-0")).unwrap();

    relwatch(tmp.path(), &repo)
        .args(["release", "6.4.99.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no changelog directory found for version 6-4-99-0"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn filetype() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("emx-filetype")
}

fn write_fixture(dir: &Path, name: &str, content: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_reports_each_label() {
    let dir = tempfile::tempdir().unwrap();
    let cases: [(&str, &[u8], &str); 5] = [
        ("empty.txt", b"", "empty"),
        ("ascii.txt", b"hello\n", "ASCII text"),
        ("latin1.txt", b"caf\xE9\n", "ISO-8859 text"),
        ("utf8.txt", "caf\u{e9}\n".as_bytes(), "UTF-8 Unicode text"),
        ("blob.bin", b"\x00\x01\x02", "data"),
    ];

    for (name, content, label) in cases {
        let path = write_fixture(dir.path(), name, content);
        filetype()
            .arg(&path)
            .assert()
            .success()
            .stdout(format!("{}: {}\n", path.display(), label));
    }
}

#[test]
fn test_unreadable_file_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    filetype()
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "{}: cannot determine (",
            missing.display()
        )));
}

#[test]
fn test_missing_argument_fails() {
    filetype()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_extra_argument_fails() {
    filetype()
        .args(["one.txt", "two.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_prefer_iso8859_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "cafe.txt", b"caf\xC3\xA9");

    filetype()
        .arg("--prefer-iso8859")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::ends_with(": ISO-8859 text\n"));
}

#[test]
fn test_recursive_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("nested")).unwrap();
    let a = write_fixture(dir.path(), "a.txt", b"plain");
    let b = write_fixture(&dir.path().join("nested"), "b.bin", b"\x00");

    filetype()
        .arg("--recursive")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(format!(
            "{}: ASCII text\n{}: data\n",
            a.display(),
            b.display()
        ));
}

#[test]
fn test_directory_without_recursive_cannot_be_determined() {
    let dir = tempfile::tempdir().unwrap();

    filetype()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("cannot determine"));
}

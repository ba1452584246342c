//! Tests driving the `oxigz` binary.

use assert_cmd::Command;
use flate2::Compression;
use flate2::GzBuilder;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_gzip(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    let path = dir.path().join(name);
    fs::write(&path, encoder.finish().unwrap()).unwrap();
    path
}

fn oxigz() -> Command {
    Command::cargo_bin("oxigz").unwrap()
}

fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}

fn stderr_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}

#[test]
fn extract_writes_file_without_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_gzip(&dir, "2018-01-01-15.json.gz", b"{\"type\":\"PushEvent\"}\n");

    let assert = oxigz().arg("extract").arg(&path).assert().success();

    let target = dir.path().join("2018-01-01-15.json");
    assert!(stdout_of(&assert).contains("Extracting"));
    assert_eq!(
        fs::read(&target).unwrap(),
        b"{\"type\":\"PushEvent\"}\n".to_vec()
    );
}

#[test]
fn extract_verbose_reports_size() {
    let dir = TempDir::new().unwrap();
    let path = write_gzip(&dir, "hello.txt.gz", b"hello world");

    let assert = oxigz().args(["x", "-v"]).arg(&path).assert().success();

    assert!(stdout_of(&assert).contains("(11 bytes)"));
}

#[test]
fn extract_overwrites_and_warns() {
    let dir = TempDir::new().unwrap();
    let path = write_gzip(&dir, "notes.md.gz", b"# fresh");
    fs::write(dir.path().join("notes.md"), "# stale and longer").unwrap();

    let assert = oxigz().arg("extract").arg(&path).assert().success();

    assert!(stderr_of(&assert).contains("Overwriting"));
    assert_eq!(
        fs::read_to_string(dir.path().join("notes.md")).unwrap(),
        "# fresh"
    );
}

#[test]
fn extract_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.txt.gz");

    let assert = oxigz().arg("extract").arg(&path).assert().failure().code(1);

    assert!(stderr_of(&assert).contains("Error: Cannot open"));
    assert!(!dir.path().join("missing.txt").exists());
}

#[test]
fn extract_invalid_data_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plain.txt.gz");
    fs::write(&path, "definitely not gzip").unwrap();

    let assert = oxigz().arg("extract").arg(&path).assert().failure();

    assert!(stderr_of(&assert).contains("Invalid gzip data"));
}

#[test]
fn info_prints_header() {
    let dir = TempDir::new().unwrap();
    let mut encoder = GzBuilder::new()
        .filename("events.json")
        .write(Vec::new(), Compression::default());
    encoder.write_all(&b"event\n".repeat(500)).unwrap();
    let path = dir.path().join("events.json.gz");
    fs::write(&path, encoder.finish().unwrap()).unwrap();

    let assert = oxigz().arg("info").arg(&path).assert().success();
    let stdout = stdout_of(&assert);

    assert!(stdout.contains("Original filename: events.json"));
    assert!(stdout.contains("Uncompressed size: 3000 bytes"));
    assert!(!dir.path().join("events.json").exists());
}

#[test]
fn info_json_is_parseable() {
    let dir = TempDir::new().unwrap();
    let path = write_gzip(&dir, "data.csv.gz", b"a,b\n");

    let assert = oxigz()
        .args(["info", "--json"])
        .arg(&path)
        .assert()
        .success();
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&assert)).unwrap();

    assert_eq!(value["members"], 1);
    assert_eq!(value["uncompressed_size"], 4);
    assert!(value.get("original_name").is_none());
}

#[test]
fn test_command_reports_ok() {
    let dir = TempDir::new().unwrap();
    let path = write_gzip(&dir, "ok.bin.gz", &[7u8; 2048]);

    let assert = oxigz().arg("test").arg(&path).assert().success();

    assert!(stdout_of(&assert).contains("OK: 2048 bytes decoded"));
    assert!(!dir.path().join("ok.bin").exists());
}

#[test]
fn target_prints_derived_path() {
    let assert = oxigz()
        .args(["target", "backups/archive.tar.gz"])
        .assert()
        .success();

    let expected = PathBuf::from("backups").join("archive.tar");
    assert_eq!(stdout_of(&assert).trim_end(), expected.display().to_string());
}

#[test]
fn target_without_extension_fails() {
    let assert = oxigz().args(["target", "README"]).assert().failure();

    assert!(stderr_of(&assert).contains("no extension to strip"));
}

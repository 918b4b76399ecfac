//! End-to-end CLI tests for chatimport.
//!
//! These tests run the actual binary against fixture files and check its
//! output and exit status.
//!
//! # Test Categories
//!
//! - **formats**: Lists registered formats in order
//! - **detect**: Prints the recognized format or fails
//! - **parse**: Emits the normalized result as JSON
//! - **Error handling**: Proper error messages for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

#![cfg(all(feature = "chatlab", feature = "qq-json", feature = "qq-txt", feature = "cli"))]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with one fixture per format plus junk.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let chatlab = r#"{"chatlab":{"version":"1.0"},"meta":{"name":"Team"},"members":[{"platformId":"u1","name":"Alice"}],"messages":[{"sender":"u1","name":"Alice","timestamp":1700000000,"type":"text","content":"hi"}]}"#;
    fs::write(dir.path().join("export.json"), chatlab).unwrap();

    let qq_json = r#"{
  "chatInfo": {"name": "周末徒步", "type": "group"},
  "messages": [
    {"timestamp": 1705314600000, "sender": {"uin": "10001", "name": "Alice"}, "type": "text", "content": {"text": "集合"}}
  ]
}"#;
    fs::write(dir.path().join("group.json"), qq_json).unwrap();

    let qq_txt = "消息记录（此消息记录为文本格式，不支持重新导入）

================================================================
消息分组:我的群聊
================================================================
消息对象:技术交流群
================================================================

2024-01-15 10:30:00 Alice(10001)
大家好

2024-01-15 10:31:05 Bob<bob@example.com>
first line
second line
";
    fs::write(dir.path().join("聊天记录.txt"), qq_txt).unwrap();

    fs::write(dir.path().join("unknown.json"), r#"{"foo":"bar"}"#).unwrap();
    fs::write(
        dir.path().join("no_messages.json"),
        r#"{"chatInfo":{"name":"Team"}}"#,
    )
    .unwrap();

    dir
}

fn fixture(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn chatimport() -> Command {
    Command::cargo_bin("chatimport").unwrap()
}

// ============================================================================
// formats
// ============================================================================

#[test]
fn test_formats_lists_in_order() {
    let output = chatimport().arg("formats").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let lines: Vec<_> = stdout.lines().collect();

    assert_eq!(
        lines,
        [
            "1. ChatLab JSON (chatlab)",
            "2. QQ Chat Exporter JSON (qq)",
            "3. QQ TXT (qq)",
        ]
    );
}

// ============================================================================
// detect
// ============================================================================

#[test]
fn test_detect_each_format() {
    let dir = setup_fixtures();
    let cases = [
        ("export.json", "ChatLab JSON"),
        ("group.json", "QQ Chat Exporter JSON"),
        ("聊天记录.txt", "QQ TXT"),
    ];

    for (file, expected) in cases {
        chatimport()
            .arg("detect")
            .arg(fixture(&dir, file))
            .assert()
            .success()
            .stdout(format!("{expected}\n"));
    }
}

#[test]
fn test_detect_unrecognized_fails() {
    let dir = setup_fixtures();
    chatimport()
        .arg("detect")
        .arg(fixture(&dir, "unknown.json"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown.json"));
}

// ============================================================================
// parse
// ============================================================================

#[test]
fn test_parse_chatlab_to_stdout() {
    let dir = setup_fixtures();
    let output = chatimport()
        .arg("parse")
        .arg(fixture(&dir, "export.json"))
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["meta"]["name"], "Team");
    assert_eq!(value["members"][0]["platformId"], "u1");
    assert_eq!(value["messages"][0]["content"], "hi");
}

#[test]
fn test_parse_txt_pretty() {
    let dir = setup_fixtures();
    chatimport()
        .arg("parse")
        .arg(fixture(&dir, "聊天记录.txt"))
        .arg("--pretty")
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  \"meta\": {"))
        .stdout(predicate::str::contains("技术交流群"))
        .stdout(predicate::str::contains("first line\\nsecond line"));
}

#[test]
fn test_parse_to_output_file() {
    let dir = setup_fixtures();
    let out = dir.path().join("normalized.json");

    chatimport()
        .arg("parse")
        .arg(fixture(&dir, "group.json"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["meta"]["platform"], "qq");
    assert_eq!(value["messages"][0]["timestamp"], 1705314600000i64);
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn test_parse_unrecognized_names_file() {
    let dir = setup_fixtures();
    chatimport()
        .arg("parse")
        .arg(fixture(&dir, "unknown.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized chat export format: unknown.json"));
}

#[test]
fn test_parse_format_error_names_format() {
    let dir = setup_fixtures();
    chatimport()
        .arg("parse")
        .arg(fixture(&dir, "no_messages.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("QQ Chat Exporter JSON"))
        .stderr(predicate::str::contains("messages"));
}

#[test]
fn test_missing_file() {
    chatimport()
        .arg("parse")
        .arg("definitely/not/here.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_no_subcommand_shows_usage() {
    chatimport()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

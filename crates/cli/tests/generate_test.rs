//! # CLI Command Tests
//!
//! Runs the `gleam` binary against a mocked Gemini endpoint.

use assert_cmd::prelude::*;
use gleam::PANEL_COUNT;
use gleam_test_utils::narrative_json;
use httpmock::{Method::POST, MockServer};
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const GEMINI_PATH: &str = "/v1beta/models/gemini-test:generateContent";

/// A `gleam` command isolated from the caller's provider environment.
fn gleam_cmd(work_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("gleam").unwrap();
    cmd.current_dir(work_dir)
        .env_remove("AI_PROVIDER")
        .env_remove("AI_API_URL")
        .env_remove("AI_API_KEY")
        .env_remove("AI_MODEL");
    cmd
}

fn mock_gemini<'a>(server: &'a MockServer, title: &str) -> httpmock::Mock<'a> {
    let text = narrative_json(title, PANEL_COUNT);
    server.mock(|when, then| {
        when.method(POST).path(GEMINI_PATH).query_param("key", "cli-key");
        then.status(200).json_body(json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        }));
    })
}

#[test]
fn test_generate_prints_narrative_json() {
    // Arrange
    let temp_dir = tempdir().unwrap();
    let server = MockServer::start();
    let gemini_mock = mock_gemini(&server, "새 교량 개통");

    // Act
    let output = gleam_cmd(temp_dir.path())
        .arg("generate")
        .arg("--article")
        .arg("단신: 시는 새 교량 개통을 발표했다.")
        .arg("--style")
        .arg("anime style")
        .env("AI_API_URL", server.url(GEMINI_PATH))
        .env("AI_API_KEY", "cli-key")
        .output()
        .unwrap();

    // Assert
    assert!(output.status.success());
    gemini_mock.assert();
    let narrative: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(narrative["articleTitle"], "새 교량 개통");
    assert_eq!(narrative["prompts"].as_array().unwrap().len(), 4);
    assert_eq!(narrative["isUrl"], false);
}

#[test]
fn test_generate_exports_into_directory() {
    // Arrange
    let temp_dir = tempdir().unwrap();
    let server = MockServer::start();
    mock_gemini(&server, "새 교량 개통");

    // Act
    let mut cmd = gleam_cmd(temp_dir.path());
    cmd.arg("generate")
        .arg("--article")
        .arg("기사 본문")
        .arg("--export")
        .arg(temp_dir.path())
        .arg("--api-url")
        .arg(server.url(GEMINI_PATH))
        .arg("--api-key")
        .arg("cli-key");

    // Assert
    cmd.assert().success();
    let exported = fs::read_to_string(temp_dir.path().join("새_교량_개통.txt")).unwrap();
    assert!(exported.starts_with("## 원본 기사 내용:\n기사 본문\n"));
    assert!(exported.contains("### 컷4 (제목: 요약 3)"));
}

#[test]
fn test_generate_without_api_key_fails() {
    let temp_dir = tempdir().unwrap();

    let mut cmd = gleam_cmd(temp_dir.path());
    cmd.arg("generate").arg("--article").arg("기사");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Google API key is not configured."));
}

#[test]
fn test_styles_lists_catalogue() {
    let temp_dir = tempdir().unwrap();

    let mut cmd = gleam_cmd(temp_dir.path());
    cmd.arg("styles");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Image styles:"))
        .stdout(predicate::str::contains("1:1"));
}

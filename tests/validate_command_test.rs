// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Integration tests for the `validate` and `documents` commands.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn run(args: &[&str]) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_book-library-server"))
        .args(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    (output.status.success(), stdout)
}

fn write_config(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).expect("Failed to write config file");
    config_path.to_string_lossy().to_string()
}

#[test]
fn test_validate_valid_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        "port: 8080\nauth:\n  username: admin\n  password: secret\n",
    );

    let (success, stdout) = run(&["validate", "--config", &path]);
    assert!(success, "Valid config should pass validation: {stdout}");
    assert!(stdout.contains("[OK]"));
    assert!(stdout.contains("API versions: 1.0, 2.0"));
    assert!(stdout.contains("/specifications/book-library-api-specification-v2.0/spec.json"));
    assert!(!stdout.contains("default credentials"));
}

#[test]
fn test_validate_warns_about_default_credentials() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "port: 8080\n");

    let (success, stdout) = run(&["validate", "--config", &path]);
    assert!(success);
    assert!(stdout.contains("default credentials"));
}

#[test]
fn test_validate_show_resolved_uses_env_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".env"),
        "BOOK_LIBRARY_TEST_PORT=9191\n",
    )
    .unwrap();
    let path = write_config(&temp_dir, "port: ${BOOK_LIBRARY_TEST_PORT}\n");

    let (success, stdout) = run(&["validate", "--config", &path, "--show-resolved"]);
    assert!(success, "{stdout}");
    assert!(stdout.contains("Port: 9191"));
}

#[test]
fn test_validate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "api:\n  versions: []\n");

    let (success, stdout) = run(&["validate", "--config", &path]);
    assert!(!success);
    assert!(stdout.contains("[ERROR]"));
}

#[test]
fn test_validate_missing_file() {
    let (success, stdout) = run(&["validate", "--config", "/nonexistent/config.yaml"]);
    assert!(!success);
    assert!(stdout.contains("not found"));
}

#[test]
fn test_documents_lists_membership() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "api:\n  versions: [\"2.0\"]\n");

    let (success, stdout) = run(&["documents", "--config", &path]);
    assert!(success, "{stdout}");
    assert!(stdout.contains("book-library-api-specification-v2.0"));
    assert!(!stdout.contains("book-library-api-specification-v1.0"));
    assert!(stdout.contains("GetAuthorsV2"));
    assert!(stdout
        .lines()
        .any(|line| line.trim_end().ends_with(" GetAuthor")));
    assert!(!stdout
        .lines()
        .any(|line| line.trim_end().ends_with(" GetAuthors")));
    assert!(!stdout.contains("UpdateAuthor"));
}

#[test]
fn test_documents_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "port: 8080\n");

    let (success, stdout) = run(&[
        "documents",
        "--config",
        &path,
        "--name",
        "book-library-api-specification-v1.0",
        "--json",
    ]);
    assert!(success, "{stdout}");

    let document: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(document["info"]["version"], "1.0");
    assert!(document["paths"]["/api/v2/authors"].is_null());
}

#[test]
fn test_documents_unknown_name() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "port: 8080\n");

    let (success, _) = run(&["documents", "--config", &path, "--name", "nope"]);
    assert!(!success);
}

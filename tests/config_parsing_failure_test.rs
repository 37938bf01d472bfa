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

//! Integration tests for config parsing failures.
//!
//! Typos and snake_case fields must be rejected when the file is loaded,
//! before they can silently fall back to defaults.

use book_library_server::api::ApiVersion;
use book_library_server::config::load_config_file;
use book_library_server::BookLibraryConfig;
use std::fs;
use tempfile::TempDir;

/// Write YAML to a temp file and attempt to load it
fn try_load_config(yaml: &str) -> Result<BookLibraryConfig, String> {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("test-config.yaml");
    fs::write(&config_path, yaml).expect("Failed to write config file");

    load_config_file(&config_path).map_err(|e| e.to_string())
}

/// Assert that loading fails with a specific field mentioned in the error
fn assert_fails_with_field(yaml: &str, expected_field: &str) {
    let err = try_load_config(yaml).expect_err("Config should fail to load");
    assert!(
        err.contains(expected_field),
        "Error should mention '{expected_field}' but got: {err}"
    );
}

#[test]
fn test_minimal_config_uses_defaults() {
    let config = try_load_config("port: 9000\n").expect("Config should load");
    assert_eq!(config.port, 9000);
    assert_eq!(config.api.versions, vec![ApiVersion::V1, ApiVersion::V2]);
    assert_eq!(config.api.spec_root, "/specifications");
}

#[test]
fn test_full_config_loads() {
    let yaml = r#"
host: 127.0.0.1
port: 8181
logLevel: debug
seedSampleData: false
api:
  name: Library
  description: Books and authors
  versions: ["1.0", "2.0", "2.1"]
  specRoot: /openapi
  uiPath: /docs
  contact:
    name: Library Team
    email: team@library.example
    url: https://library.example
  license:
    name: Apache-2.0
    url: https://www.apache.org/licenses/LICENSE-2.0
auth:
  username: admin
  password: hunter2
  realm: library
"#;
    let config = try_load_config(yaml).expect("Config should load");
    assert_eq!(
        config.api.versions,
        vec![ApiVersion::V1, ApiVersion::V2, ApiVersion::new(2, 1)]
    );
    assert!(!config.seed_sample_data);
    assert_eq!(config.auth.realm, "library");
    assert_eq!(config.api.contact.name, "Library Team");
}

#[test]
fn test_snake_case_field_rejected() {
    assert_fails_with_field("log_level: info\n", "log_level");
}

#[test]
fn test_unknown_api_field_rejected() {
    assert_fails_with_field("api:\n  specPath: /specs\n", "specPath");
}

#[test]
fn test_malformed_version_rejected() {
    assert_fails_with_field("api:\n  versions: [\"one\"]\n", "one");
}

#[test]
fn test_empty_versions_rejected() {
    assert_fails_with_field("api:\n  versions: []\n", "api.versions");
}

#[test]
fn test_colliding_versions_rejected() {
    assert_fails_with_field(
        "api:\n  versions: [\"1\", \"1.0\"]\n",
        "book-library-api-specification-v1.0",
    );
}

#[test]
fn test_docs_paths_over_server_routes_rejected() {
    assert_fails_with_field("api:\n  specRoot: /api/specs\n", "api.specRoot");
    assert_fails_with_field("api:\n  uiPath: /health\n", "api.uiPath");
}

#[test]
fn test_username_with_colon_rejected() {
    assert_fails_with_field("auth:\n  username: \"a:b\"\n", "auth.username");
}

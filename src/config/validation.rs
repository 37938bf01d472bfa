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

//! Semantic validation of a parsed configuration.
//!
//! Unknown keys are already rejected during deserialization. This module
//! checks values: all problems are collected and reported together.

use super::types::BookLibraryConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Prefixes already routed by the server.
const RESERVED_PATHS: &[&str] = &["/health", "/api"];

/// Validation error for configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Multiple validation errors:\n{}", .0.join("\n"))]
    Multiple(Vec<String>),
}

struct Problems(Vec<ValidationError>);

impl Problems {
    fn push(&mut self, field: &str, reason: impl Into<String>) {
        self.0.push(ValidationError::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        });
    }

    fn into_result(mut self) -> Result<(), ValidationError> {
        match self.0.len() {
            0 => Ok(()),
            1 => Err(self.0.remove(0)),
            _ => Err(ValidationError::Multiple(
                self.0.iter().map(ToString::to_string).collect(),
            )),
        }
    }
}

fn nests_under(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn check_path(problems: &mut Problems, field: &str, path: &str) {
    if !path.starts_with('/') {
        problems.push(field, format!("'{path}' must start with '/'"));
    }
    if path.len() > 1 && path.ends_with('/') {
        problems.push(field, format!("'{path}' must not end with '/'"));
    }
    if path
        .chars()
        .any(|c| !(c.is_ascii_alphanumeric() || "/-._~".contains(c)))
    {
        problems.push(field, format!("'{path}' may only contain letters, digits and '/-._~'"));
    }
}

/// Validate every value in `config`.
pub fn validate_config(config: &BookLibraryConfig) -> Result<(), ValidationError> {
    let mut problems = Problems(Vec::new());

    if config.host.trim().is_empty() {
        problems.push("host", "cannot be empty");
    }
    if config.port == 0 {
        problems.push("port", "cannot be 0");
    }
    if !LOG_LEVELS.contains(&config.log_level.to_lowercase().as_str()) {
        problems.push(
            "logLevel",
            format!(
                "'{}' is not one of {}",
                config.log_level,
                LOG_LEVELS.join(", ")
            ),
        );
    }

    let api = &config.api;
    if api.name.trim().is_empty() {
        problems.push("api.name", "cannot be empty");
    }
    if api.versions.is_empty() {
        problems.push("api.versions", "at least one API version must be configured");
    }
    if let Err(e) = api.version_registry() {
        problems.push("api.versions", e.to_string());
    }
    check_path(&mut problems, "api.specRoot", &api.spec_root);
    check_path(&mut problems, "api.uiPath", &api.ui_path);
    for (field, path) in [("api.specRoot", &api.spec_root), ("api.uiPath", &api.ui_path)] {
        if path == "/" {
            problems.push(field, "cannot be the root path");
        }
        for reserved in RESERVED_PATHS {
            if nests_under(path, reserved) {
                problems.push(field, format!("'{path}' overlaps the {reserved} routes"));
            }
        }
    }
    if nests_under(&api.spec_root, &api.ui_path) || nests_under(&api.ui_path, &api.spec_root) {
        problems.push("api.uiPath", "must not equal or nest under api.specRoot");
    }

    let auth = &config.auth;
    if auth.username.is_empty() {
        problems.push("auth.username", "cannot be empty");
    }
    if auth.username.contains(':') {
        problems.push("auth.username", "cannot contain ':'");
    }
    if auth.password.is_empty() {
        problems.push("auth.password", "cannot be empty");
    }

    problems.into_result()
}

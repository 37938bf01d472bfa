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

//! Environment variable interpolation for configuration files.
//!
//! Supported syntax:
//! - `${VAR_NAME}` - replaced by the variable's value; an error if unset
//! - `${VAR_NAME:-default}` - `default` when the variable is unset or empty
//!
//! # Examples
//!
//! ```
//! use book_library_server::config::env_interpolation::interpolate;
//! use std::env;
//!
//! env::set_var("LIBRARY_DOC_HOST", "localhost");
//!
//! let input = "host: ${LIBRARY_DOC_HOST}\nport: ${LIBRARY_DOC_PORT:-8080}";
//! let result = interpolate(input).unwrap();
//! assert_eq!(result, "host: localhost\nport: 8080");
//! ```

use log::debug;
use regex::{Captures, Regex};
use std::env;
use std::sync::LazyLock;

/// Upper bound on the interpolated document size.
const MAX_INTERPOLATED_LENGTH: usize = 10_000_000;

/// Group 1 is the variable name, group 2 the default value if `:-` is present.
static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
        .unwrap_or_else(|e| panic!("invalid interpolation pattern: {e}"))
});

/// Errors that can occur during environment variable interpolation.
#[derive(Debug, thiserror::Error)]
pub enum InterpolationError {
    #[error("Environment variable '{name}' is not set and has no default value")]
    MissingVariable { name: String },

    #[error("Environment variable '{name}' contains invalid Unicode")]
    InvalidUnicode { name: String },

    #[error("Interpolated result exceeds maximum allowed length of {MAX_INTERPOLATED_LENGTH} bytes")]
    ResultTooLarge,
}

fn resolve(caps: &Captures<'_>) -> Result<String, InterpolationError> {
    let name = &caps[1];
    let default = caps.get(2).map(|m| m.as_str());

    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        Ok(_) | Err(env::VarError::NotPresent) => {
            default
                .map(str::to_string)
                .ok_or_else(|| InterpolationError::MissingVariable {
                    name: name.to_string(),
                })
        }
        Err(env::VarError::NotUnicode(_)) => Err(InterpolationError::InvalidUnicode {
            name: name.to_string(),
        }),
    }
}

/// Interpolate environment variables in `input`.
///
/// Substitution is single-pass: values containing `${...}` are not expanded
/// again.
pub fn interpolate(input: &str) -> Result<String, InterpolationError> {
    let mut result = String::with_capacity(input.len());
    let mut last_end = 0;
    let mut used = Vec::new();

    for caps in ENV_VAR_PATTERN.captures_iter(input) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        result.push_str(&input[last_end..whole.start()]);
        result.push_str(&resolve(&caps)?);
        last_end = whole.end();
        used.push(caps[1].to_string());

        if result.len() > MAX_INTERPOLATED_LENGTH {
            return Err(InterpolationError::ResultTooLarge);
        }
    }
    result.push_str(&input[last_end..]);

    if !used.is_empty() {
        debug!("Interpolated environment variables: {}", used.join(", "));
    }

    Ok(result)
}

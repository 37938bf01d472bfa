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

//! Configuration management for the book library server.
//!
//! - Type-safe configuration structures (camelCase keys, unknown keys rejected)
//! - Environment variable interpolation (`${VAR}`, `${VAR:-default}`)
//! - YAML and JSON file loading
//! - Value validation
//!
//! ## Configuration File Example
//!
//! ```yaml
//! host: "${LIBRARY_HOST:-0.0.0.0}"
//! port: 8080
//! logLevel: info
//! seedSampleData: true
//! api:
//!   name: The Library API
//!   versions: ["1.0", "2.0"]
//!   specRoot: /specifications
//!   uiPath: /swagger-ui
//! auth:
//!   username: "${LIBRARY_API_USER}"
//!   password: "${LIBRARY_API_PASSWORD}"
//! ```

pub mod env_interpolation;
pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{from_json_str, from_yaml_str, load_config_file, save_config_file, ConfigError};
pub use types::{ApiSettings, AuthSettings, BookLibraryConfig};
pub use validation::ValidationError;

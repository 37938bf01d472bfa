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

//! Configuration types for the book library server.

use serde::{Deserialize, Serialize};

use super::validation::{self, ValidationError};
use crate::api::openapi::document::{ContactInfo, DocumentMetadata, LicenseInfo};
use crate::api::openapi::SurfaceError;
use crate::api::version::{ApiVersion, VersionRegistry};

/// Top-level server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct BookLibraryConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// Populate the store with a few authors and books at startup.
    pub seed_sample_data: bool,
    pub api: ApiSettings,
    pub auth: AuthSettings,
}

impl Default for BookLibraryConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            seed_sample_data: true,
            api: ApiSettings::default(),
            auth: AuthSettings::default(),
        }
    }
}

impl BookLibraryConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_config(self)
    }
}

/// API surface and documentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ApiSettings {
    /// Title of every published document.
    pub name: String,
    pub description: String,
    /// API versions to serve and document.
    pub versions: Vec<ApiVersion>,
    /// Documents are served at `{specRoot}/{documentName}/spec.json`.
    pub spec_root: String,
    /// Path of the Swagger UI explorer.
    pub ui_path: String,
    pub contact: ContactInfo,
    pub license: LicenseInfo,
}

impl Default for ApiSettings {
    fn default() -> Self {
        let metadata = DocumentMetadata::default();
        Self {
            name: metadata.api_name,
            description: metadata.description,
            versions: vec![ApiVersion::V1, ApiVersion::V2],
            spec_root: "/specifications".to_string(),
            ui_path: "/swagger-ui".to_string(),
            contact: metadata.contact,
            license: metadata.license,
        }
    }
}

impl ApiSettings {
    pub fn metadata(&self) -> DocumentMetadata {
        DocumentMetadata {
            api_name: self.name.clone(),
            description: self.description.clone(),
            contact: self.contact.clone(),
            license: self.license.clone(),
        }
    }

    pub fn version_registry(&self) -> Result<VersionRegistry, SurfaceError> {
        VersionRegistry::new(self.versions.iter().copied())
    }
}

/// Credentials accepted by the basic-authentication gate.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AuthSettings {
    pub username: String,
    pub password: String,
    pub realm: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            username: "librarian".to_string(),
            password: "changeme".to_string(),
            realm: "book-library".to_string(),
        }
    }
}

impl AuthSettings {
    pub fn uses_default_credentials(&self) -> bool {
        let defaults = Self::default();
        self.username == defaults.username && self.password == defaults.password
    }
}

// Keep the password out of logs.
impl std::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSettings")
            .field("username", &self.username)
            .field("password", &"***")
            .field("realm", &self.realm)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BookLibraryConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.api.versions, vec![ApiVersion::V1, ApiVersion::V2]);
        assert_eq!(config.api.name, "The Library API");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_camel_case_keys() {
        let yaml = r#"
logLevel: debug
seedSampleData: false
api:
  specRoot: /docs
  uiPath: /explorer
  versions: ["1.0"]
"#;
        let config: BookLibraryConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(!config.seed_sample_data);
        assert_eq!(config.api.spec_root, "/docs");
        assert_eq!(config.api.ui_path, "/explorer");
        assert_eq!(config.api.versions, vec![ApiVersion::V1]);
        assert_eq!(config.api.name, "The Library API");
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let yaml = "api:\n  verisons: [\"1.0\"]\n";
        let err = serde_yaml::from_str::<BookLibraryConfig>(yaml).unwrap_err();
        assert!(err.to_string().contains("verisons"));
    }

    #[test]
    fn test_metadata_from_settings() {
        let api = ApiSettings {
            name: "Shelf".to_string(),
            ..Default::default()
        };
        let metadata = api.metadata();
        assert_eq!(metadata.api_name, "Shelf");
        assert_eq!(metadata.contact, ContactInfo::default());
    }

    #[test]
    fn test_auth_debug_hides_password() {
        let rendered = format!("{:?}", AuthSettings::default());
        assert!(!rendered.contains("changeme"));
    }
}

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

//! Per-version document metadata and the shared security scheme.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::openapi::info::{ContactBuilder, Info, InfoBuilder, LicenseBuilder};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityRequirement, SecurityScheme};

use crate::api::version::{ApiVersion, VersionRegistry};

/// Name of the basic-auth scheme every document references.
pub const BASIC_AUTH_SCHEME: &str = "myBasicAuth";
pub const BASIC_AUTH_DESCRIPTION: &str = "Input your username and password to access this API";

/// Organization contact published in every document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub url: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john.doe@email.com".to_string(),
            url: "https://my.homepage.com".to_string(),
        }
    }
}

/// License published in every document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LicenseInfo {
    pub name: String,
    pub url: String,
}

impl Default for LicenseInfo {
    fn default() -> Self {
        Self {
            name: "MIT License".to_string(),
            url: "https://opensource.org/licenses/MIT".to_string(),
        }
    }
}

/// Organization-level facts shared by all documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub api_name: String,
    pub description: String,
    pub contact: ContactInfo,
    pub license: LicenseInfo,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            api_name: "The Library API".to_string(),
            description: "Through this API you can access books".to_string(),
            contact: ContactInfo::default(),
            license: LicenseInfo::default(),
        }
    }
}

/// A security scheme definition, owned once by the [`SecuritySchemeRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecuritySchemeDefinition {
    pub name: String,
    pub kind: SecuritySchemeKind,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecuritySchemeKind {
    HttpBasic,
}

impl SecuritySchemeDefinition {
    pub fn basic_auth() -> Self {
        Self {
            name: BASIC_AUTH_SCHEME.to_string(),
            kind: SecuritySchemeKind::HttpBasic,
            description: Some(BASIC_AUTH_DESCRIPTION.to_string()),
        }
    }

    pub fn to_openapi(&self) -> SecurityScheme {
        match self.kind {
            SecuritySchemeKind::HttpBasic => {
                SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Basic)
                    .description(self.description.clone())
                    .build(),
            )
            }
        }
    }
}

/// Reference from a document to a registered scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityRequirementRef {
    pub scheme: String,
    pub scopes: Vec<String>,
}

impl SecurityRequirementRef {
    pub fn to_openapi(&self) -> SecurityRequirement {
        SecurityRequirement::new(self.scheme.clone(), self.scopes.clone())
    }
}

/// Owns scheme definitions by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecuritySchemeRegistry {
    schemes: IndexMap<String, SecuritySchemeDefinition>,
}

impl SecuritySchemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `definition` and return a reference to it.
    ///
    /// Registering the same name again keeps the first definition.
    pub fn register(&mut self, definition: SecuritySchemeDefinition) -> SecurityRequirementRef {
        let name = definition.name.clone();
        self.schemes.entry(name.clone()).or_insert(definition);
        SecurityRequirementRef {
            scheme: name,
            scopes: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SecuritySchemeDefinition> {
        self.schemes.get(name)
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}

/// One named, versioned interface-description document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiDocument {
    pub name: String,
    pub title: String,
    pub version: ApiVersion,
    pub description: String,
    pub contact: ContactInfo,
    pub license: LicenseInfo,
    pub security: SecurityRequirementRef,
}

impl ApiDocument {
    pub fn info(&self) -> Info {
        InfoBuilder::new()
            .title(self.title.clone())
            .version(self.version.to_string())
            .description(Some(self.description.clone()))
            .contact(Some(
                ContactBuilder::new()
                    .name(Some(self.contact.name.clone()))
                    .email(Some(self.contact.email.clone()))
                    .url(Some(self.contact.url.clone()))
                    .build(),
            ))
            .license(Some(
                LicenseBuilder::new()
                    .name(self.license.name.clone())
                    .url(Some(self.license.url.clone()))
                    .build(),
            ))
            .build()
    }
}

/// Build the document for a single version.
pub fn build_document(
    version: &ApiVersion,
    registry: &VersionRegistry,
    metadata: &DocumentMetadata,
    security: SecurityRequirementRef,
) -> ApiDocument {
    ApiDocument {
        name: registry.document_name(version),
        title: metadata.api_name.clone(),
        version: *version,
        description: metadata.description.clone(),
        contact: metadata.contact.clone(),
        license: metadata.license.clone(),
        security,
    }
}

/// All documents for a registry, keyed by document name in version order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSet {
    documents: IndexMap<String, ApiDocument>,
    security_schemes: SecuritySchemeRegistry,
}

impl DocumentSet {
    /// One document per registered version. The basic-auth scheme is
    /// registered once and referenced from each document.
    pub fn build(registry: &VersionRegistry, metadata: &DocumentMetadata) -> Self {
        let mut security_schemes = SecuritySchemeRegistry::new();
        let requirement = security_schemes.register(SecuritySchemeDefinition::basic_auth());

        let documents = registry
            .all_versions()
            .iter()
            .map(|version| {
                let document = build_document(version, registry, metadata, requirement.clone());
                (document.name.clone(), document)
            })
            .collect();

        Self {
            documents,
            security_schemes,
        }
    }

    pub fn get(&self, name: &str) -> Option<&ApiDocument> {
        self.documents.get(name)
    }

    pub fn documents(&self) -> impl Iterator<Item = &ApiDocument> {
        self.documents.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    pub fn security_schemes(&self) -> &SecuritySchemeRegistry {
        &self.security_schemes
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registry() -> VersionRegistry {
        VersionRegistry::new([ApiVersion::V1, ApiVersion::V2]).unwrap()
    }

    #[test]
    fn test_build_document_metadata() {
        let set = DocumentSet::build(&registry(), &DocumentMetadata::default());
        let doc = set.get("book-library-api-specification-v2.0").unwrap();

        assert_eq!(doc.title, "The Library API");
        assert_eq!(doc.version, ApiVersion::V2);
        assert_eq!(doc.description, "Through this API you can access books");
        assert_eq!(doc.contact.email, "john.doe@email.com");
        assert_eq!(doc.license.name, "MIT License");
        assert_eq!(doc.security.scheme, BASIC_AUTH_SCHEME);
        assert!(doc.security.scopes.is_empty());
    }

    #[test]
    fn test_documents_follow_version_order() {
        let set = DocumentSet::build(&registry(), &DocumentMetadata::default());
        let names: Vec<&str> = set.names().collect();
        assert_eq!(
            names,
            vec![
                "book-library-api-specification-v1.0",
                "book-library-api-specification-v2.0"
            ]
        );
    }

    #[test]
    fn test_security_scheme_registered_once() {
        let set = DocumentSet::build(&registry(), &DocumentMetadata::default());
        assert_eq!(set.security_schemes().len(), 1);
        let scheme = set.security_schemes().get(BASIC_AUTH_SCHEME).unwrap();
        assert_eq!(scheme.kind, SecuritySchemeKind::HttpBasic);
        assert_eq!(scheme.description.as_deref(), Some(BASIC_AUTH_DESCRIPTION));

        for doc in set.documents() {
            assert_eq!(doc.security.scheme, scheme.name);
        }
    }

    #[test]
    fn test_register_same_name_twice() {
        let mut schemes = SecuritySchemeRegistry::new();
        let first = schemes.register(SecuritySchemeDefinition::basic_auth());
        let second = schemes.register(SecuritySchemeDefinition::basic_auth());

        assert_eq!(schemes.len(), 1);
        assert_eq!(first, second);
        assert_eq!(second.scheme, BASIC_AUTH_SCHEME);
    }

    #[test]
    fn test_build_is_idempotent() {
        let metadata = DocumentMetadata::default();
        let first = DocumentSet::build(&registry(), &metadata);
        let second = DocumentSet::build(&registry(), &metadata);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_registry_builds_no_documents() {
        let registry = VersionRegistry::new(Vec::new()).unwrap();
        let set = DocumentSet::build(&registry, &DocumentMetadata::default());
        assert!(set.is_empty());
    }

    #[test]
    fn test_info_rendering() {
        let set = DocumentSet::build(&registry(), &DocumentMetadata::default());
        let info = set
            .get("book-library-api-specification-v1.0")
            .unwrap()
            .info();
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(json["title"], "The Library API");
        assert_eq!(json["version"], "1.0");
        assert_eq!(json["contact"]["name"], "John Doe");
        assert_eq!(json["license"]["url"], "https://opensource.org/licenses/MIT");
    }
}

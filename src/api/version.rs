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

//! API version definitions and the version registry.
//!
//! Every published OpenAPI document is derived from exactly one registered
//! [`ApiVersion`]. The registry is built once from configuration at startup
//! and never changes afterwards.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::openapi::SurfaceError;

/// Prefix shared by every published document name.
pub const DOCUMENT_NAME_PREFIX: &str = "book-library-api-specification-v";

/// A major/minor API version.
///
/// Ordering is by major, then minor, so `1.0 < 1.1 < 2.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApiVersion {
    major: u32,
    minor: u32,
}

impl ApiVersion {
    /// API Version 1.0
    pub const V1: ApiVersion = ApiVersion::new(1, 0);
    /// API Version 2.0
    pub const V2: ApiVersion = ApiVersion::new(2, 0);

    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// Get the URL path segment for this version (e.g., "v1").
    pub fn path_segment(&self) -> String {
        format!("v{}", self.major)
    }

    /// Get the URL path prefix for this version (e.g., "/api/v1").
    pub fn path_prefix(&self) -> String {
        format!("/api/{}", self.path_segment())
    }

    /// Label shown in the explorer UI version picker (e.g., "V1", "V2.5").
    pub fn group_name(&self) -> String {
        if self.minor == 0 {
            format!("V{}", self.major)
        } else {
            format!("V{}.{}", self.major, self.minor)
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for ApiVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        let (major, minor) = match digits.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (digits, "0"),
        };

        match (major.parse::<u32>(), minor.parse::<u32>()) {
            (Ok(major), Ok(minor)) => Ok(ApiVersion::new(major, minor)),
            _ => Err(format!("Unknown API version: {s}")),
        }
    }
}

impl Serialize for ApiVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ApiVersionVisitor;

        impl Visitor<'_> for ApiVersionVisitor {
            type Value = ApiVersion;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an API version such as \"1.0\" or \"v2\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ApiVersion, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ApiVersion, E> {
                u32::try_from(v)
                    .map(|major| ApiVersion::new(major, 0))
                    .map_err(|_| E::custom(format!("API version {v} is out of range")))
            }

            // Unquoted YAML such as `versions: [1.0, 2.5]` arrives as floats.
            fn visit_f64<E: de::Error>(self, v: f64) -> Result<ApiVersion, E> {
                v.to_string().parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(ApiVersionVisitor)
    }
}

/// Canonical name of the OpenAPI document published for `version`.
///
/// This string is both the internal document key and a public URL segment.
pub fn document_name(version: &ApiVersion) -> String {
    format!("{DOCUMENT_NAME_PREFIX}{version}")
}

/// The ordered, immutable set of API versions served by this process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VersionRegistry {
    versions: Vec<ApiVersion>,
}

impl VersionRegistry {
    /// Build a registry from configured versions.
    ///
    /// Versions are sorted ascending. Two entries mapping to the same
    /// document name are rejected. An empty registry is allowed here; the
    /// server refuses to start with one.
    pub fn new(versions: impl IntoIterator<Item = ApiVersion>) -> Result<Self, SurfaceError> {
        let mut versions: Vec<ApiVersion> = versions.into_iter().collect();
        versions.sort();

        for pair in versions.windows(2) {
            let (a, b) = (document_name(&pair[0]), document_name(&pair[1]));
            if a == b {
                return Err(SurfaceError::DocumentNameCollision { name: a });
            }
        }

        Ok(Self { versions })
    }

    /// All registered versions, ascending.
    pub fn all_versions(&self) -> &[ApiVersion] {
        &self.versions
    }

    /// Document name for `version`.
    pub fn document_name(&self, version: &ApiVersion) -> String {
        document_name(version)
    }

    /// All document names in version order.
    pub fn document_names(&self) -> Vec<String> {
        self.versions.iter().map(document_name).collect()
    }

    /// The highest registered version.
    pub fn current(&self) -> Option<ApiVersion> {
        self.versions.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Fail unless at least one version is registered.
    pub fn ensure_servable(&self) -> Result<(), SurfaceError> {
        if self.versions.is_empty() {
            return Err(SurfaceError::NoVersionsRegistered);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1.0", ApiVersion::new(1, 0) ; "major minor")]
    #[test_case("2", ApiVersion::new(2, 0) ; "major only")]
    #[test_case("v1", ApiVersion::new(1, 0) ; "prefixed major")]
    #[test_case("V2.1", ApiVersion::new(2, 1) ; "uppercase prefix")]
    #[test_case(" 3.4 ", ApiVersion::new(3, 4) ; "surrounding whitespace")]
    fn test_version_from_str(input: &str, expected: ApiVersion) {
        assert_eq!(input.parse::<ApiVersion>().unwrap(), expected);
    }

    #[test]
    fn test_version_from_str_rejects_garbage() {
        assert!("v".parse::<ApiVersion>().is_err());
        assert!("one".parse::<ApiVersion>().is_err());
        assert!("1.x".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_version_ordering() {
        assert!(ApiVersion::new(1, 0) < ApiVersion::new(1, 1));
        assert!(ApiVersion::new(1, 9) < ApiVersion::new(2, 0));
    }

    #[test]
    fn test_version_display_and_paths() {
        assert_eq!(ApiVersion::V1.to_string(), "1.0");
        assert_eq!(ApiVersion::V2.path_prefix(), "/api/v2");
        assert_eq!(ApiVersion::V2.group_name(), "V2");
        assert_eq!(ApiVersion::new(2, 5).group_name(), "V2.5");
    }

    #[test]
    fn test_version_deserialize_from_yaml() {
        let versions: Vec<ApiVersion> = serde_yaml::from_str("[\"1.0\", 2, 2.5, v3]").unwrap();
        assert_eq!(
            versions,
            vec![
                ApiVersion::new(1, 0),
                ApiVersion::new(2, 0),
                ApiVersion::new(2, 5),
                ApiVersion::new(3, 0),
            ]
        );
    }

    #[test]
    fn test_document_name_format() {
        assert_eq!(
            document_name(&ApiVersion::V1),
            "book-library-api-specification-v1.0"
        );
        assert_eq!(
            document_name(&ApiVersion::new(2, 3)),
            "book-library-api-specification-v2.3"
        );
    }

    #[test]
    fn test_document_names_are_injective() {
        let registry = VersionRegistry::new([
            ApiVersion::new(1, 0),
            ApiVersion::new(1, 1),
            ApiVersion::new(2, 0),
            ApiVersion::new(10, 0),
        ])
        .unwrap();
        let mut names = registry.document_names();
        names.dedup();
        assert_eq!(names.len(), registry.len());
    }

    #[test]
    fn test_registry_sorts_versions() {
        let registry = VersionRegistry::new([ApiVersion::V2, ApiVersion::V1]).unwrap();
        assert_eq!(registry.all_versions(), &[ApiVersion::V1, ApiVersion::V2]);
        assert_eq!(registry.current(), Some(ApiVersion::V2));
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let err = VersionRegistry::new([ApiVersion::V1, ApiVersion::V2, ApiVersion::V1])
            .unwrap_err();
        assert!(matches!(
            err,
            SurfaceError::DocumentNameCollision { ref name }
                if name == "book-library-api-specification-v1.0"
        ));
    }

    #[test]
    fn test_empty_registry_is_constructible_but_not_servable() {
        let registry = VersionRegistry::new(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert!(registry.current().is_none());
        assert!(matches!(
            registry.ensure_servable(),
            Err(SurfaceError::NoVersionsRegistered)
        ));
    }
}

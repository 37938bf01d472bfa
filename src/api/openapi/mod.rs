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

//! Versioned API surface.
//!
//! The server generates one OpenAPI description covering every route. This
//! module splits it into one published document per registered API version:
//!
//! - `operation` - operation metadata, the effective-version classifier and
//!   the document membership predicate
//! - `document` - per-version document metadata and the shared security scheme
//! - `surface` - rendering of the published documents
//! - `catalog` - the route table, collected from each API module
//! - `api_doc` - the generated OpenAPI description

pub mod api_doc;
pub mod catalog;
pub mod document;
pub mod operation;
pub mod surface;

use thiserror::Error;

pub use api_doc::ApiDoc;
pub use catalog::route_table;
pub use document::{
    build_document, ApiDocument, ContactInfo, DocumentMetadata, DocumentSet, LicenseInfo,
    SecuritySchemeDefinition, BASIC_AUTH_SCHEME,
};
pub use operation::{
    belongs, effective_versions, ApiOperation, HttpMethod, OperationCatalog, OperationGroup,
};
pub use surface::{spec_path, ApiSurface, PublishedDocument, SPEC_FILE_NAME};

/// Errors raised while assembling the API surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("No API versions are registered; at least one version is required to serve documents")]
    NoVersionsRegistered,

    #[error("Two API versions map to the same document name '{name}'")]
    DocumentNameCollision { name: String },
}

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

//! REST API implementation for the book library server.
//!
//! The API uses URL-based versioning for the author endpoints. Book and
//! system endpoints are unversioned and appear in every published document.
//!
//! ## API Structure
//!
//! ```text
//! /health                                    - Health check (public)
//! /api/versions                              - List registered API versions
//! /api/v1/authors                            - Authors (v1)
//! /api/v2/authors                            - Authors (v2)
//! /api/authors/{authorId}/books              - Books of an author
//! /specifications/{document}/spec.json       - One OpenAPI document per version
//! /swagger-ui                                - Interactive documentation
//! ```
//!
//! ## Module Organization
//!
//! - `version` - API versions and the version registry
//! - `openapi` - Operation metadata, document assembly and rendering
//! - `shared` - Common types and handlers shared across API versions
//! - `v1`, `v2`, `unversioned` - Route modules
//! - `models` - Data Transfer Objects (DTOs) for API requests/responses
//! - `mappings` - Conversion between DTOs and store entities

pub mod mappings;
pub mod models;
pub mod openapi;
pub mod shared;
pub mod unversioned;
pub mod v1;
pub mod v2;
pub mod version;

// Re-export commonly used types from shared module
pub use shared::error::*;
pub use shared::handlers::SurfaceContext;
pub use shared::responses::*;

pub use openapi::{route_table, ApiDoc, ApiSurface, SurfaceError};
pub use v1::build_v1_router;
pub use v2::build_v2_router;
pub use version::{document_name, ApiVersion, VersionRegistry};

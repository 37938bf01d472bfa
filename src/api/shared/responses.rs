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

//! Common response types shared across API versions.

use serde::Serialize;
use utoipa::ToSchema;

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status of the server
    pub status: String,
    /// Current server timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// A published specification document
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLink {
    /// Document name, also the URL segment of the document
    pub name: String,
    /// API version the document describes
    pub version: String,
    /// Path of the machine-readable document
    pub url: String,
}

/// Response listing available API versions
#[derive(Serialize, ToSchema)]
pub struct ApiVersionsResponse {
    /// List of available API versions
    pub versions: Vec<String>,
    /// The current/latest API version
    pub current: String,
    /// Specification documents, one per version
    pub documents: Vec<DocumentLink>,
}

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

//! API v1 route definitions.
//!
//! All routes are designed to be nested under `/api/v1/`.

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers;
use crate::api::openapi::{HttpMethod, OperationGroup};
use crate::api::version::ApiVersion;

/// Build the v1 API router.
///
/// State is provided by the parent router through `Extension` layers.
pub fn build_v1_router() -> Router {
    Router::new()
        .route("/authors", get(handlers::list_authors))
        .route("/authors/:authorId", get(handlers::get_author))
        .route(
            "/authors/:authorId",
            put(handlers::update_author).patch(handlers::patch_author),
        )
}

/// Version metadata for the v1 routes.
///
/// The single-author lookup is also published in the 2.0 document, which
/// has no lookup of its own.
pub fn operation_group() -> OperationGroup {
    let prefix = ApiVersion::V1.path_prefix();
    OperationGroup::new("authors-v1")
        .implements([ApiVersion::V1])
        .operation(HttpMethod::Get, format!("{prefix}/authors"), "GetAuthors")
        .declared_operation(
            HttpMethod::Get,
            format!("{prefix}/authors/{{authorId}}"),
            "GetAuthor",
            [ApiVersion::V1, ApiVersion::V2],
        )
        .operation(
            HttpMethod::Put,
            format!("{prefix}/authors/{{authorId}}"),
            "UpdateAuthor",
        )
        .operation(
            HttpMethod::Patch,
            format!("{prefix}/authors/{{authorId}}"),
            "PartiallyUpdateAuthor",
        )
}

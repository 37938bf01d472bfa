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

//! Unversioned route definitions.

use axum::{routing::get, Router};

use super::handlers;
use crate::api::openapi::{HttpMethod, OperationGroup};

/// Public routes mounted at the server root.
pub fn build_health_router() -> Router {
    Router::new().route("/health", get(handlers::health_check))
}

/// Routes designed to be nested under `/api/`.
pub fn build_unversioned_router() -> Router {
    Router::new()
        .route("/versions", get(handlers::list_api_versions))
        .route(
            "/authors/:authorId/books",
            get(handlers::list_books).post(handlers::create_book),
        )
        .route("/authors/:authorId/books/:bookId", get(handlers::get_book))
}

/// Groups with no implemented versions; their operations are listed in
/// every document.
pub fn operation_groups() -> Vec<OperationGroup> {
    vec![
        OperationGroup::new("books")
            .operation(HttpMethod::Get, "/api/authors/{authorId}/books", "GetBooks")
            .operation(HttpMethod::Post, "/api/authors/{authorId}/books", "CreateBook")
            .operation(
                HttpMethod::Get,
                "/api/authors/{authorId}/books/{bookId}",
                "GetBook",
            ),
        OperationGroup::new("system")
            .operation(HttpMethod::Get, "/health", "HealthCheck")
            .operation(HttpMethod::Get, "/api/versions", "ListApiVersions"),
    ]
}

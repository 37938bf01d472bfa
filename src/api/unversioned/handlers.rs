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

//! Handlers for unversioned routes.

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    response::{Json, Response},
};

use crate::api::models::{BookDto, BookForCreationDto};
use crate::api::shared::error::ErrorResponse;
use crate::api::shared::handlers::{self as shared, json_body, SurfaceContext};
use crate::api::shared::responses::{ApiVersionsResponse, HealthResponse};
use crate::store::LibraryStore;

/// Check server health
#[utoipa::path(
    get,
    path = "/health",
    operation_id = "HealthCheck",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse),
    ),
    security(()),
    tag = "System"
)]
pub async fn health_check() -> Json<HealthResponse> {
    shared::health_check().await
}

/// List the registered API versions
#[utoipa::path(
    get,
    path = "/api/versions",
    operation_id = "ListApiVersions",
    responses(
        (status = 200, description = "Registered API versions and their documents", body = ApiVersionsResponse),
    ),
    tag = "System"
)]
pub async fn list_api_versions(
    context: Extension<SurfaceContext>,
) -> Json<ApiVersionsResponse> {
    shared::list_api_versions(context).await
}

/// Get the books of an author
#[utoipa::path(
    get,
    path = "/api/authors/{authorId}/books",
    operation_id = "GetBooks",
    params(
        ("authorId" = uuid::Uuid, Path, description = "The id of the book author")
    ),
    responses(
        (status = 200, description = "The author's books", body = [BookDto]),
        (status = 404, description = "Author not found", body = ErrorResponse),
    ),
    tag = "Books"
)]
pub async fn list_books(
    Extension(store): Extension<LibraryStore>,
    Path(author_id): Path<String>,
) -> Result<Json<Vec<BookDto>>, ErrorResponse> {
    shared::list_books(&store, &author_id).await
}

/// Get a specific book by an author
#[utoipa::path(
    get,
    path = "/api/authors/{authorId}/books/{bookId}",
    operation_id = "GetBook",
    params(
        ("authorId" = uuid::Uuid, Path, description = "The id of the book author"),
        ("bookId" = uuid::Uuid, Path, description = "The id of the book")
    ),
    responses(
        (status = 200, description = "The book", body = BookDto),
        (status = 404, description = "Author or book not found", body = ErrorResponse),
    ),
    tag = "Books"
)]
pub async fn get_book(
    Extension(store): Extension<LibraryStore>,
    Path((author_id, book_id)): Path<(String, String)>,
) -> Result<Json<BookDto>, ErrorResponse> {
    shared::get_book(&store, &author_id, &book_id).await
}

/// Create a book for a specific author
#[utoipa::path(
    post,
    path = "/api/authors/{authorId}/books",
    operation_id = "CreateBook",
    params(
        ("authorId" = uuid::Uuid, Path, description = "The id of the book author")
    ),
    request_body = BookForCreationDto,
    responses(
        (status = 201, description = "The created book", body = BookDto,
            headers(("Location" = String, description = "Path of the created book"))),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 404, description = "Author not found", body = ErrorResponse),
        (status = 422, description = "Invalid book fields", body = ErrorResponse),
    ),
    tag = "Books"
)]
pub async fn create_book(
    Extension(store): Extension<LibraryStore>,
    Path(author_id): Path<String>,
    body: Result<Json<BookForCreationDto>, JsonRejection>,
) -> Result<Response, ErrorResponse> {
    let payload = json_body(body)?;
    shared::create_book(&store, &author_id, payload).await
}

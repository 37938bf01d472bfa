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

//! API v1 handlers with OpenAPI annotations.

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    response::Json,
};

use crate::api::models::{AuthorDto, AuthorForUpdateDto, AuthorPatchDto};
use crate::api::shared::error::ErrorResponse;
use crate::api::shared::handlers::{self as shared, json_body};
use crate::store::LibraryStore;

/// Get the authors
#[utoipa::path(
    get,
    path = "/api/v1/authors",
    operation_id = "GetAuthors",
    responses(
        (status = 200, description = "All authors", body = [AuthorDto]),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse),
    ),
    tag = "Authors"
)]
pub async fn list_authors(Extension(store): Extension<LibraryStore>) -> Json<Vec<AuthorDto>> {
    shared::list_authors(&store).await
}

/// Get an author by their id
#[utoipa::path(
    get,
    path = "/api/v1/authors/{authorId}",
    operation_id = "GetAuthor",
    params(
        ("authorId" = uuid::Uuid, Path, description = "The id of the author you want to get")
    ),
    responses(
        (status = 200, description = "The author", body = AuthorDto),
        (status = 400, description = "Malformed author id", body = ErrorResponse),
        (status = 404, description = "Author not found", body = ErrorResponse),
    ),
    tag = "Authors"
)]
pub async fn get_author(
    Extension(store): Extension<LibraryStore>,
    Path(author_id): Path<String>,
) -> Result<Json<AuthorDto>, ErrorResponse> {
    shared::get_author(&store, &author_id).await
}

/// Update an author
#[utoipa::path(
    put,
    path = "/api/v1/authors/{authorId}",
    operation_id = "UpdateAuthor",
    params(
        ("authorId" = uuid::Uuid, Path, description = "The id of the author to update")
    ),
    request_body = AuthorForUpdateDto,
    responses(
        (status = 200, description = "The updated author", body = AuthorDto),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 404, description = "Author not found", body = ErrorResponse),
        (status = 422, description = "Invalid author fields", body = ErrorResponse),
    ),
    tag = "Authors"
)]
pub async fn update_author(
    Extension(store): Extension<LibraryStore>,
    Path(author_id): Path<String>,
    body: Result<Json<AuthorForUpdateDto>, JsonRejection>,
) -> Result<Json<AuthorDto>, ErrorResponse> {
    let update = json_body(body)?;
    shared::update_author(&store, &author_id, update).await
}

/// Partially update an author
///
/// Only the fields present in the body are changed.
#[utoipa::path(
    patch,
    path = "/api/v1/authors/{authorId}",
    operation_id = "PartiallyUpdateAuthor",
    params(
        ("authorId" = uuid::Uuid, Path, description = "The id of the author to update")
    ),
    request_body = AuthorPatchDto,
    responses(
        (status = 200, description = "The updated author", body = AuthorDto),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 404, description = "Author not found", body = ErrorResponse),
        (status = 422, description = "The patch leaves the author invalid", body = ErrorResponse),
    ),
    tag = "Authors"
)]
pub async fn patch_author(
    Extension(store): Extension<LibraryStore>,
    Path(author_id): Path<String>,
    body: Result<Json<AuthorPatchDto>, JsonRejection>,
) -> Result<Json<AuthorDto>, ErrorResponse> {
    let patch = json_body(body)?;
    shared::patch_author(&store, &author_id, patch).await
}

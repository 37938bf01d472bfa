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

//! Shared handler implementations used across API versions.
//!
//! These handler functions contain the core logic that is reused by the
//! version-specific handlers. Each API module wraps them with its own path
//! annotations so that every route carries its own OpenAPI operation.

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use log::{debug, info};
use std::sync::Arc;
use uuid::Uuid;

use super::error::{error_codes, ErrorDetail, ErrorResponse};
use super::responses::{ApiVersionsResponse, DocumentLink, HealthResponse};
use crate::api::models::{AuthorDto, AuthorForUpdateDto, AuthorPatchDto, BookDto, BookForCreationDto};
use crate::api::openapi::{spec_path, ApiSurface};
use crate::store::{LibraryStore, StoreError};

/// The computed API surface plus the root it is published under.
#[derive(Debug, Clone)]
pub struct SurfaceContext {
    pub surface: Arc<ApiSurface>,
    pub spec_root: String,
}

impl SurfaceContext {
    pub fn new(surface: Arc<ApiSurface>, spec_root: impl Into<String>) -> Self {
        Self {
            surface,
            spec_root: spec_root.into(),
        }
    }
}

/// Parse a path segment as a resource id.
pub fn parse_id(param: &str, raw: &str) -> Result<Uuid, ErrorResponse> {
    Uuid::parse_str(raw).map_err(|_| {
        ErrorResponse::new(
            error_codes::INVALID_REQUEST,
            format!("'{raw}' is not a valid {param}"),
        )
        .with_details(ErrorDetail {
            resource_type: None,
            resource_id: None,
            field: Some(param.to_string()),
        })
    })
}

/// Unwrap a JSON body, reporting malformed payloads in the API error format.
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ErrorResponse> {
    body.map(|Json(value)| value).map_err(|rejection| {
        ErrorResponse::new(error_codes::INVALID_REQUEST, rejection.body_text())
    })
}

/// Check server health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List the registered API versions and their documents
pub async fn list_api_versions(
    Extension(context): Extension<SurfaceContext>,
) -> Json<ApiVersionsResponse> {
    let surface = &context.surface;
    let registry = surface.registry();

    let documents = surface
        .documents()
        .documents()
        .map(|document| DocumentLink {
            name: document.name.clone(),
            version: document.version.to_string(),
            url: spec_path(&context.spec_root, &document.name),
        })
        .collect();

    Json(ApiVersionsResponse {
        versions: registry
            .all_versions()
            .iter()
            .map(|version| version.path_segment())
            .collect(),
        current: registry
            .current()
            .map(|version| version.path_segment())
            .unwrap_or_default(),
        documents,
    })
}

/// List all authors
pub async fn list_authors(store: &LibraryStore) -> Json<Vec<AuthorDto>> {
    let authors = store.list_authors().await;
    Json(authors.into_iter().map(AuthorDto::from).collect())
}

/// Get one author
pub async fn get_author(store: &LibraryStore, author_id: &str) -> Result<Json<AuthorDto>, ErrorResponse> {
    let id = parse_id("authorId", author_id)?;
    match store.get_author(id).await {
        Some(author) => Ok(Json(author.into())),
        None => Err(StoreError::AuthorNotFound(id).into()),
    }
}

/// Replace every field of an author
pub async fn update_author(
    store: &LibraryStore,
    author_id: &str,
    update: AuthorForUpdateDto,
) -> Result<Json<AuthorDto>, ErrorResponse> {
    let id = parse_id("authorId", author_id)?;
    let mut author = store
        .get_author(id)
        .await
        .ok_or(StoreError::AuthorNotFound(id))?;

    update.apply_to(&mut author)?;
    let updated = store.update_author(author).await?;
    info!("Updated author '{id}'");
    Ok(Json(updated.into()))
}

/// Change selected fields of an author
pub async fn patch_author(
    store: &LibraryStore,
    author_id: &str,
    patch: AuthorPatchDto,
) -> Result<Json<AuthorDto>, ErrorResponse> {
    let id = parse_id("authorId", author_id)?;
    let mut author = store
        .get_author(id)
        .await
        .ok_or(StoreError::AuthorNotFound(id))?;

    patch.apply_to(&mut author)?;
    let updated = store.update_author(author).await?;
    info!("Patched author '{id}'");
    Ok(Json(updated.into()))
}

/// List the books of an author
pub async fn list_books(
    store: &LibraryStore,
    author_id: &str,
) -> Result<Json<Vec<BookDto>>, ErrorResponse> {
    let id = parse_id("authorId", author_id)?;
    let author = store
        .get_author(id)
        .await
        .ok_or(StoreError::AuthorNotFound(id))?;
    let books = store.list_books(id).await?;

    Ok(Json(
        books
            .into_iter()
            .map(|book| BookDto::from_parts(book, &author))
            .collect(),
    ))
}

/// Get one book of an author
pub async fn get_book(
    store: &LibraryStore,
    author_id: &str,
    book_id: &str,
) -> Result<Json<BookDto>, ErrorResponse> {
    let author_id = parse_id("authorId", author_id)?;
    let book_id = parse_id("bookId", book_id)?;
    let author = store
        .get_author(author_id)
        .await
        .ok_or(StoreError::AuthorNotFound(author_id))?;
    let book = store.get_book(author_id, book_id).await?;

    Ok(Json(BookDto::from_parts(book, &author)))
}

/// Create a book for an author, answering 201 with its location
pub async fn create_book(
    store: &LibraryStore,
    author_id: &str,
    payload: BookForCreationDto,
) -> Result<Response, ErrorResponse> {
    let id = parse_id("authorId", author_id)?;
    let author = store
        .get_author(id)
        .await
        .ok_or(StoreError::AuthorNotFound(id))?;

    let book = payload.into_book(id)?;
    let book = store.add_book(book).await?;
    debug!("Created book '{}' for author '{id}'", book.id);

    let location = format!("/api/authors/{id}/books/{}", book.id);
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&location) {
        headers.insert(header::LOCATION, value);
    }

    Ok((
        StatusCode::CREATED,
        headers,
        Json(BookDto::from_parts(book, &author)),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_rejects_garbage() {
        let err = parse_id("authorId", "not-a-uuid").unwrap_err();
        assert_eq!(err.code, error_codes::INVALID_REQUEST);
        assert!(err.message.contains("not-a-uuid"));
    }

    #[tokio::test]
    async fn test_get_author_not_found() {
        let store = LibraryStore::new();
        let err = get_author(&store, &Uuid::new_v4().to_string())
            .await
            .unwrap_err();
        assert_eq!(err.code, error_codes::AUTHOR_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_patch_author_keeps_unset_fields() {
        let store = LibraryStore::with_sample_data();
        let author = store.list_authors().await.remove(0);

        let Json(patched) = patch_author(
            &store,
            &author.id.to_string(),
            AuthorPatchDto {
                first_name: Some("George R.R.".to_string()),
                last_name: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(patched.first_name, "George R.R.");
        assert_eq!(patched.last_name, author.last_name);
    }

    #[tokio::test]
    async fn test_create_book_sets_location() {
        let store = LibraryStore::with_sample_data();
        let author = store.list_authors().await.remove(0);

        let response = create_book(
            &store,
            &author.id.to_string(),
            BookForCreationDto {
                title: "A Storm of Swords".to_string(),
                description: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap();
        assert!(location.starts_with(&format!("/api/authors/{}/books/", author.id)));
    }
}

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

//! The generated OpenAPI description covering every route.
//!
//! This is the input to document rendering; it is never served as is.

use utoipa::OpenApi;

use crate::api::models::{
    AuthorDto, AuthorForUpdateDto, AuthorPatchDto, BookDto, BookForCreationDto,
};
use crate::api::shared::error::{ErrorDetail, ErrorResponse};
use crate::api::shared::responses::{ApiVersionsResponse, DocumentLink, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::unversioned::handlers::health_check,
        crate::api::unversioned::handlers::list_api_versions,
        crate::api::unversioned::handlers::list_books,
        crate::api::unversioned::handlers::get_book,
        crate::api::unversioned::handlers::create_book,
        crate::api::v1::handlers::list_authors,
        crate::api::v1::handlers::get_author,
        crate::api::v1::handlers::update_author,
        crate::api::v1::handlers::patch_author,
        crate::api::v2::handlers::list_authors,
    ),
    components(
        schemas(
            AuthorDto,
            AuthorForUpdateDto,
            AuthorPatchDto,
            BookDto,
            BookForCreationDto,
            HealthResponse,
            ApiVersionsResponse,
            DocumentLink,
            ErrorResponse,
            ErrorDetail,
        )
    ),
    tags(
        (name = "Authors", description = "Authors of the books in the library"),
        (name = "Books", description = "Books, always accessed through their author"),
        (name = "System", description = "Health and version information"),
    )
)]
pub struct ApiDoc;

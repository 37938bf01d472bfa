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

use axum::{extract::Extension, response::Json};

use crate::api::models::AuthorDto;
use crate::api::shared::error::ErrorResponse;
use crate::api::shared::handlers as shared;
use crate::store::LibraryStore;

/// Get the authors (v2)
#[utoipa::path(
    get,
    path = "/api/v2/authors",
    operation_id = "GetAuthorsV2",
    responses(
        (status = 200, description = "All authors", body = [AuthorDto]),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse),
    ),
    tag = "Authors"
)]
pub async fn list_authors(Extension(store): Extension<LibraryStore>) -> Json<Vec<AuthorDto>> {
    shared::list_authors(&store).await
}

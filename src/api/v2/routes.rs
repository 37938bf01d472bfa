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

//! API v2 route definitions, nested under `/api/v2/`.

use axum::{routing::get, Router};

use super::handlers;
use crate::api::openapi::{HttpMethod, OperationGroup};
use crate::api::version::ApiVersion;

pub fn build_v2_router() -> Router {
    Router::new().route("/authors", get(handlers::list_authors))
}

pub fn operation_group() -> OperationGroup {
    OperationGroup::new("authors-v2")
        .implements([ApiVersion::V2])
        .operation(
            HttpMethod::Get,
            format!("{}/authors", ApiVersion::V2.path_prefix()),
            "GetAuthorsV2",
        )
}

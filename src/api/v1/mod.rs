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

//! API Version 1 (v1) implementation.
//!
//! ## Endpoint Structure
//!
//! - `GET /api/v1/authors` - List authors
//! - `GET /api/v1/authors/{authorId}` - Get an author
//! - `PUT /api/v1/authors/{authorId}` - Replace an author
//! - `PATCH /api/v1/authors/{authorId}` - Partially update an author

pub mod handlers;
pub mod routes;

pub use routes::{build_v1_router, operation_group};

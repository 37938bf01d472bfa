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

//! Routes that are not tied to an API version.
//!
//! Every registered version's document lists these operations.
//!
//! - `GET /health` - Health check (public)
//! - `GET /api/versions` - Registered versions and their documents
//! - `GET /api/authors/{authorId}/books` - List an author's books
//! - `POST /api/authors/{authorId}/books` - Create a book
//! - `GET /api/authors/{authorId}/books/{bookId}` - Get a book

pub mod handlers;
pub mod routes;

pub use routes::{build_health_router, build_unversioned_router, operation_groups};

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

//! Data Transfer Objects (DTOs) exchanged over the API.
//!
//! - **`authors`**: author listing and update payloads
//! - **`books`**: book listing and creation payloads

pub mod authors;
pub mod books;

pub use authors::{AuthorDto, AuthorForUpdateDto, AuthorPatchDto};
pub use books::{BookDto, BookForCreationDto};

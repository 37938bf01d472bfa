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

//! Conversions between store entities and API DTOs.

use uuid::Uuid;

use super::models::{AuthorDto, AuthorForUpdateDto, AuthorPatchDto, BookDto, BookForCreationDto};
use crate::store::{Author, Book};

/// Maximum length of a name or title field.
pub const MAX_NAME_LENGTH: usize = 150;

/// A payload that would leave an entity in an invalid state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Field '{field}' {reason}")]
pub struct MappingError {
    pub field: &'static str,
    pub reason: String,
}

fn check_text(field: &'static str, value: &str) -> Result<(), MappingError> {
    if value.trim().is_empty() {
        return Err(MappingError {
            field,
            reason: "cannot be empty".to_string(),
        });
    }
    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(MappingError {
            field,
            reason: format!("cannot exceed {MAX_NAME_LENGTH} characters"),
        });
    }
    Ok(())
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            first_name: author.first_name,
            last_name: author.last_name,
        }
    }
}

impl AuthorForUpdateDto {
    /// Copy the payload onto `author`.
    pub fn apply_to(self, author: &mut Author) -> Result<(), MappingError> {
        check_text("firstName", &self.first_name)?;
        check_text("lastName", &self.last_name)?;
        author.first_name = self.first_name;
        author.last_name = self.last_name;
        Ok(())
    }
}

impl AuthorPatchDto {
    /// Apply the present fields onto `author`, validating the result.
    pub fn apply_to(self, author: &mut Author) -> Result<(), MappingError> {
        let first_name = self.first_name.unwrap_or_else(|| author.first_name.clone());
        let last_name = self.last_name.unwrap_or_else(|| author.last_name.clone());
        AuthorForUpdateDto {
            first_name,
            last_name,
        }
        .apply_to(author)
    }
}

impl BookDto {
    pub fn from_parts(book: Book, author: &Author) -> Self {
        Self {
            id: book.id,
            author_id: book.author_id,
            author_first_name: author.first_name.clone(),
            author_last_name: author.last_name.clone(),
            title: book.title,
            description: book.description,
        }
    }
}

impl BookForCreationDto {
    /// Build a new book entity owned by `author_id`.
    pub fn into_book(self, author_id: Uuid) -> Result<Book, MappingError> {
        check_text("title", &self.title)?;
        Ok(Book {
            id: Uuid::new_v4(),
            author_id,
            title: self.title,
            description: self.description,
        })
    }
}

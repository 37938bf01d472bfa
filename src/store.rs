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

//! In-memory store for authors and books.
//!
//! The store is cheap to clone; all clones share the same data.

use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// An author entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

/// A book entity, always owned by one author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Author '{0}' not found")]
    AuthorNotFound(Uuid),

    #[error("Book '{book_id}' not found for author '{author_id}'")]
    BookNotFound { author_id: Uuid, book_id: Uuid },
}

#[derive(Default)]
struct LibraryData {
    authors: IndexMap<Uuid, Author>,
    books: IndexMap<Uuid, Book>,
}

/// Thread-safe store of authors and their books.
#[derive(Clone, Default)]
pub struct LibraryStore {
    data: Arc<RwLock<LibraryData>>,
}

impl LibraryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a few authors and books.
    pub fn with_sample_data() -> Self {
        let mut data = LibraryData::default();
        for (author, books) in sample_data() {
            for book in books {
                data.books.insert(book.id, book);
            }
            data.authors.insert(author.id, author);
        }
        Self {
            data: Arc::new(RwLock::new(data)),
        }
    }

    /// List all authors in insertion order.
    pub async fn list_authors(&self) -> Vec<Author> {
        let data = self.data.read().await;
        data.authors.values().cloned().collect()
    }

    /// Get an author by ID.
    pub async fn get_author(&self, id: Uuid) -> Option<Author> {
        let data = self.data.read().await;
        data.authors.get(&id).cloned()
    }

    /// Replace an existing author.
    pub async fn update_author(&self, author: Author) -> Result<Author, StoreError> {
        let mut data = self.data.write().await;
        match data.authors.get_mut(&author.id) {
            Some(existing) => {
                *existing = author.clone();
                Ok(author)
            }
            None => Err(StoreError::AuthorNotFound(author.id)),
        }
    }

    /// List the books of an author.
    pub async fn list_books(&self, author_id: Uuid) -> Result<Vec<Book>, StoreError> {
        let data = self.data.read().await;
        if !data.authors.contains_key(&author_id) {
            return Err(StoreError::AuthorNotFound(author_id));
        }
        Ok(data
            .books
            .values()
            .filter(|book| book.author_id == author_id)
            .cloned()
            .collect())
    }

    /// Get one book of an author.
    pub async fn get_book(&self, author_id: Uuid, book_id: Uuid) -> Result<Book, StoreError> {
        let data = self.data.read().await;
        if !data.authors.contains_key(&author_id) {
            return Err(StoreError::AuthorNotFound(author_id));
        }
        data.books
            .get(&book_id)
            .filter(|book| book.author_id == author_id)
            .cloned()
            .ok_or(StoreError::BookNotFound { author_id, book_id })
    }

    /// Add a book to an existing author.
    pub async fn add_book(&self, book: Book) -> Result<Book, StoreError> {
        let mut data = self.data.write().await;
        if !data.authors.contains_key(&book.author_id) {
            return Err(StoreError::AuthorNotFound(book.author_id));
        }
        data.books.insert(book.id, book.clone());
        Ok(book)
    }

    pub async fn author_count(&self) -> usize {
        self.data.read().await.authors.len()
    }
}

fn sample_data() -> Vec<(Author, Vec<Book>)> {
    let author = |id: u128, first: &str, last: &str| Author {
        id: Uuid::from_u128(id),
        first_name: first.to_string(),
        last_name: last.to_string(),
    };
    let book = |id: u128, author_id: u128, title: &str, description: &str| Book {
        id: Uuid::from_u128(id),
        author_id: Uuid::from_u128(author_id),
        title: title.to_string(),
        description: Some(description.to_string()),
    };

    vec![
        (
            author(0xd28888e9_2ba9_473a_a40f_e38cb54f9b35, "George", "RR Martin"),
            vec![
                book(
                    0x5b1c2b4d_48c7_402a_80c3_cc796ad49c6b,
                    0xd28888e9_2ba9_473a_a40f_e38cb54f9b35,
                    "A Game of Thrones",
                    "The first novel in A Song of Ice and Fire.",
                ),
                book(
                    0xd8663e5e_7494_4f81_8739_6e0de1bea7ee,
                    0xd28888e9_2ba9_473a_a40f_e38cb54f9b35,
                    "A Clash of Kings",
                    "The second novel in A Song of Ice and Fire.",
                ),
            ],
        ),
        (
            author(0xda2fd609_d754_4feb_8acd_c4f9ff13ba96, "Stephen", "Fry"),
            vec![book(
                0xd173e20d_159e_4127_9ce9_b0ac2564ad97,
                0xda2fd609_d754_4feb_8acd_c4f9ff13ba96,
                "Mythos",
                "The Greek myths retold.",
            )],
        ),
        (
            author(0x24810dfc_2d94_4cc7_aab5_cdf98b83f0c9, "James", "Elroy"),
            vec![book(
                0x493c3228_3444_4a49_9cc0_e8532edc59b2,
                0x24810dfc_2d94_4cc7_aab5_cdf98b83f0c9,
                "American Tabloid",
                "The first book of the Underworld USA trilogy.",
            )],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(first: &str, last: &str) -> Author {
        Author {
            id: Uuid::new_v4(),
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    async fn insert_author(store: &LibraryStore, first: &str, last: &str) -> Author {
        let author = author(first, last);
        store
            .data
            .write()
            .await
            .authors
            .insert(author.id, author.clone());
        author
    }

    #[tokio::test]
    async fn test_update_and_get_author() {
        let store = LibraryStore::new();
        let mut ada = insert_author(&store, "Ada", "Lovelace").await;
        ada.last_name = "King".to_string();

        assert_eq!(store.update_author(ada.clone()).await, Ok(ada.clone()));
        assert_eq!(store.get_author(ada.id).await, Some(ada));
    }

    #[tokio::test]
    async fn test_update_missing_author_fails() {
        let store = LibraryStore::new();
        let missing = author("No", "One");
        assert_eq!(
            store.update_author(missing.clone()).await,
            Err(StoreError::AuthorNotFound(missing.id))
        );
    }

    #[tokio::test]
    async fn test_books_are_scoped_to_author() {
        let store = LibraryStore::new();
        let a = insert_author(&store, "A", "A").await;
        let b = insert_author(&store, "B", "B").await;

        let book = store
            .add_book(Book {
                id: Uuid::new_v4(),
                author_id: a.id,
                title: "Only A".to_string(),
                description: None,
            })
            .await
            .unwrap();

        assert_eq!(store.list_books(a.id).await.unwrap().len(), 1);
        assert!(store.list_books(b.id).await.unwrap().is_empty());
        assert_eq!(
            store.get_book(b.id, book.id).await,
            Err(StoreError::BookNotFound {
                author_id: b.id,
                book_id: book.id
            })
        );
    }

    #[tokio::test]
    async fn test_add_book_requires_author() {
        let store = LibraryStore::new();
        let orphan = Uuid::new_v4();
        let result = store
            .add_book(Book {
                id: Uuid::new_v4(),
                author_id: orphan,
                title: "Orphan".to_string(),
                description: None,
            })
            .await;
        assert_eq!(result, Err(StoreError::AuthorNotFound(orphan)));
    }

    #[tokio::test]
    async fn test_sample_data() {
        let store = LibraryStore::with_sample_data();
        assert_eq!(store.author_count().await, 3);
        let authors = store.list_authors().await;
        assert_eq!(authors[0].first_name, "George");
        assert_eq!(store.list_books(authors[0].id).await.unwrap().len(), 2);
    }
}

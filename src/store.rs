use rand::Rng;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::book::Book;

/// Number of books synthesized when an empty store is listed.
pub const SEED_SIZE: usize = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Got negative number: {0}")]
    NegativeCount(i64),
    #[error("Book not found: {0}")]
    NotFound(Uuid),
}

/// In-memory, insertion ordered book storage.
///
/// Every operation holds the lock for its whole duration, so single calls are atomic.
/// Nothing spans calls: two clients reading then writing the same book race and the
/// last write wins.
///
/// Lookups by id are O(n) scans over the sequence.
#[derive(Debug, Default)]
pub struct BookStore {
    books: RwLock<Vec<Book>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists the books, seeding the store first if it is empty.
    ///
    /// A `limit` within `0..=len` returns that many leading books, any larger limit returns all of them.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, limit: Option<i64>) -> Result<Vec<Book>, StoreError> {
        if let Some(limit) = limit.filter(|limit| *limit < 0) {
            tracing::warn!(limit, "Negative limit");

            return Err(StoreError::NegativeCount(limit));
        }

        let mut books = self.books.write().await;

        if books.is_empty() {
            tracing::debug!(count = SEED_SIZE, "Seeding empty store");

            books.extend(seed_books());
        }

        let books = match limit.and_then(|limit| usize::try_from(limit).ok()) {
            Some(limit) if limit <= books.len() => books[..limit].to_vec(),
            _ => books.clone(),
        };

        Ok(books)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Option<Book> {
        let books = self.books.read().await;

        books.iter().find(|book| book.id == id).cloned()
    }

    #[tracing::instrument(skip_all, fields(id = %book.id))]
    pub async fn create(&self, book: Book) -> Book {
        let mut books = self.books.write().await;

        books.push(book.clone());

        tracing::debug!(len = books.len(), "Created");

        book
    }

    /// Replaces the book stored under `id` with `book`, keeping its position.
    ///
    /// `book.id` is stored as given, even when it differs from `id`.
    #[tracing::instrument(skip(self, book))]
    pub async fn update(&self, id: Uuid, book: Book) -> Result<Book, StoreError> {
        let mut books = self.books.write().await;

        let slot = books
            .iter_mut()
            .find(|stored| stored.id == id)
            .ok_or(StoreError::NotFound(id))?;

        *slot = book.clone();

        Ok(book)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut books = self.books.write().await;

        let index = books
            .iter()
            .position(|book| book.id == id)
            .ok_or(StoreError::NotFound(id))?;

        books.remove(index);

        Ok(())
    }
}

fn seed_books() -> Vec<Book> {
    let mut rng = rand::thread_rng();

    (0..SEED_SIZE)
        .map(|i| Book {
            id: Uuid::new_v4(),
            title: format!("Book {i}"),
            author: format!("Author {i}"),
            description: Some("A dummy book".to_string()),
            rating: rng.gen_range(0..=100),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, rating: i64) -> Book {
        Book::new(Uuid::new_v4(), title, "Author", Some("A book".into()), rating)
            .expect("Book should be valid")
    }

    #[tokio::test]
    async fn listing_empty_store_seeds_ten_books() {
        let store = BookStore::new();

        let books = store.list(None).await.expect("List should succeed");

        assert_eq!(books.len(), SEED_SIZE);
        for (i, book) in books.iter().enumerate() {
            assert_eq!(book.title, format!("Book {i}"));
            assert_eq!(book.author, format!("Author {i}"));
            assert!((0..=100).contains(&book.rating));
        }
    }

    #[tokio::test]
    async fn seeding_happens_only_once() {
        let store = BookStore::new();

        let first = store.list(None).await.unwrap();
        let second = store.list(None).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn limit_returns_leading_books_in_order() {
        let store = BookStore::new();
        let all = store.list(None).await.unwrap();

        for limit in 0..=all.len() {
            let books = store.list(Some(limit as i64)).await.unwrap();

            assert_eq!(books, all[..limit]);
        }
    }

    #[tokio::test]
    async fn limit_beyond_len_returns_everything() {
        let store = BookStore::new();

        let books = store.list(Some(1000)).await.unwrap();

        assert_eq!(books.len(), SEED_SIZE);
    }

    #[tokio::test]
    async fn negative_limit_fails_without_seeding() {
        let store = BookStore::new();

        assert_eq!(store.list(Some(-1)).await, Err(StoreError::NegativeCount(-1)));
        assert!(store.books.read().await.is_empty());
    }

    #[tokio::test]
    async fn created_book_is_appended_and_found() {
        let store = BookStore::new();
        store.list(None).await.unwrap();

        let created = store.create(book("Dune", 90)).await;

        assert_eq!(store.get(created.id).await, Some(created.clone()));
        assert_eq!(store.list(None).await.unwrap().last(), Some(&created));
    }

    #[tokio::test]
    async fn create_on_empty_store_skips_seeding() {
        let store = BookStore::new();

        let created = store.create(book("Dune", 90)).await;

        assert_eq!(store.list(None).await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn missing_book_is_none() {
        let store = BookStore::new();

        assert_eq!(store.get(Uuid::new_v4()).await, None);
    }

    #[tokio::test]
    async fn update_replaces_in_place() {
        let store = BookStore::new();
        let first = store.create(book("First", 1)).await;
        let second = store.create(book("Second", 2)).await;

        let replacement = Book {
            id: first.id,
            ..book("Replaced", 50)
        };
        let updated = store.update(first.id, replacement.clone()).await.unwrap();

        assert_eq!(updated, replacement);
        assert_eq!(store.get(first.id).await, Some(replacement.clone()));
        assert_eq!(store.list(None).await.unwrap(), vec![replacement, second]);
    }

    #[tokio::test]
    async fn update_keeps_payload_id() {
        let store = BookStore::new();
        let original = store.create(book("Original", 1)).await;

        let replacement = book("Other", 2);
        store.update(original.id, replacement.clone()).await.unwrap();

        assert_eq!(store.get(original.id).await, None);
        assert_eq!(store.get(replacement.id).await, Some(replacement));
    }

    #[tokio::test]
    async fn update_missing_book_fails() {
        let store = BookStore::new();
        let id = Uuid::new_v4();

        assert_eq!(
            store.update(id, book("Title", 1)).await,
            Err(StoreError::NotFound(id))
        );
    }

    #[tokio::test]
    async fn delete_removes_book() {
        let store = BookStore::new();
        let created = store.create(book("Title", 1)).await;

        store.delete(created.id).await.unwrap();

        assert_eq!(store.get(created.id).await, None);
        assert_eq!(store.delete(created.id).await, Err(StoreError::NotFound(created.id)));
    }
}

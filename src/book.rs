use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

/// A book as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ToSchema, Validate)]
#[schema(example = json!({
    "id": "fd370f21-17ab-4284-87cd-ef28c9de5189",
    "title": "Book 9",
    "author": "Author 1",
    "description": "A dummy book",
    "rating": 69
}))]
pub struct Book {
    pub id: Uuid,
    #[validate(length(min = 3, message = "Must be at least 3 characters long"))]
    pub title: String,
    #[validate(length(min = 1, message = "Must not be empty"))]
    pub author: String,
    /// Description of the book
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Must be between 1 and 100 characters long"))]
    pub description: Option<String>,
    #[validate(range(min = 0, max = 100, message = "Must be between 0 and 100"))]
    pub rating: i64,
}

impl Book {
    /// Builds a book, rejecting it if any field constraint is violated.
    pub fn new(
        id: Uuid,
        title: impl Into<String>,
        author: impl Into<String>,
        description: Option<String>,
        rating: i64,
    ) -> Result<Self, ValidationErrors> {
        let book = Book {
            id,
            title: title.into(),
            author: author.into(),
            description,
            rating,
        };

        book.validate()?;

        Ok(book)
    }
}

/// A [`Book`] without its rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookNoRating {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    /// Description of the book
    pub description: Option<String>,
}

impl From<Book> for BookNoRating {
    fn from(book: Book) -> Self {
        BookNoRating {
            id: book.id,
            title: book.title,
            author: book.author,
            description: book.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_names(errors: &ValidationErrors) -> Vec<String> {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        fields
    }

    #[test]
    fn accepts_valid_book() {
        let book = Book::new(Uuid::new_v4(), "Dune", "Frank Herbert", None, 100)
            .expect("Book should be valid");

        assert_eq!(book.title, "Dune");
        assert_eq!(book.description, None);
    }

    #[test]
    fn enumerates_every_violated_field() {
        let errors = Book::new(Uuid::new_v4(), "Go", "", Some(String::new()), 101)
            .expect_err("Book should be invalid");

        assert_eq!(
            field_names(&errors),
            vec!["author", "description", "rating", "title"]
        );
    }

    #[test]
    fn description_bounds_are_inclusive() {
        let id = Uuid::new_v4();

        assert!(Book::new(id, "Title", "Author", Some("x".repeat(100)), 0).is_ok());
        assert!(Book::new(id, "Title", "Author", Some("x".repeat(101)), 0).is_err());
        assert!(Book::new(id, "Title", "Author", Some("x".into()), 0).is_ok());
    }

    #[test]
    fn negative_rating_is_rejected() {
        let errors = Book::new(Uuid::new_v4(), "Title", "Author", None, -1)
            .expect_err("Rating should be out of range");

        assert_eq!(field_names(&errors), vec!["rating"]);
    }

    #[test]
    fn projection_drops_rating() {
        let book = Book::new(Uuid::new_v4(), "Title", "Author", Some("A book".into()), 42)
            .expect("Book should be valid");

        let projection = serde_json::to_value(BookNoRating::from(book.clone()))
            .expect("Projection should serialize");

        assert_eq!(projection["title"], "Title");
        assert!(projection.get("rating").is_none());
    }
}

use axum::{extract::State, Json};
use uuid::Uuid;

use crate::{book::Book, extractor::path::ApiPath, state::ApiState};

/// Finds a book by id.
///
/// A missing book is answered with `null`.
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = Uuid, Path, description = "Book id")),
    responses(
        (status = 200, description = "The book, or `null` if it does not exist", body = Book),
    )
)]
pub async fn get_book(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Json<Option<Book>> {
    Json(state.store().get(id).await)
}

use axum::{extract::State, Json};
use uuid::Uuid;

use crate::{
    book::BookNoRating,
    extractor::path::ApiPath,
    state::ApiState,
};

#[utoipa::path(
    get,
    path = "/books/no-rating/{id}",
    tag = "books",
    params(("id" = Uuid, Path, description = "Book id")),
    responses(
        (status = 200, description = "The book without its rating, or `null`", body = BookNoRating),
    )
)]
pub async fn get_book_no_rating(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Json<Option<BookNoRating>> {
    Json(state.store().get(id).await.map(BookNoRating::from))
}

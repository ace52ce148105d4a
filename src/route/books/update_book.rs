use axum::{extract::State, Json};
use uuid::Uuid;

use crate::{
    book::Book,
    error::{ApiError, ApiErrorMessage, ErrorVerbosityProvider},
    extractor::{json::ApiJson, path::ApiPath, validated::Validated},
    state::ApiState,
};

/// Replaces the book stored under `id`.
///
/// The id inside the body is stored as sent, it is not forced to match the path.
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = Uuid, Path, description = "Id of the book to replace")),
    request_body = Book,
    responses(
        (status = 200, description = "The updated book", body = Book),
        (status = 404, description = "Book not found", body = ApiErrorMessage),
        (status = 422, description = "Invalid fields", body = ApiErrorMessage),
    )
)]
pub async fn update_book(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<Uuid>,
    Validated(ApiJson(book)): Validated<ApiJson<Book>>,
) -> Result<Json<Book>, ApiError> {
    let book = state
        .store()
        .update(id, book)
        .await
        .map_err(|err| ApiError::from_store_error(state.error_verbosity(), err))?;

    Ok(Json(book))
}

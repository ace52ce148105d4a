use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    book::Book,
    error::ApiErrorMessage,
    extractor::{json::ApiJson, validated::Validated},
    state::ApiState,
};

#[derive(Debug)]
pub struct CreateBookResponse {
    pub book: Book,
}

impl IntoResponse for CreateBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.book)).into_response()
    }
}

/// Appends a book to the store.
#[utoipa::path(
    post,
    path = "/",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "The created book", body = Book),
        (status = 400, description = "Malformed body"),
        (status = 422, description = "Invalid fields", body = ApiErrorMessage),
    )
)]
pub async fn create_book(
    State(state): State<ApiState>,
    Validated(ApiJson(book)): Validated<ApiJson<Book>>,
) -> CreateBookResponse {
    let book = state.store().create(book).await;

    CreateBookResponse { book }
}

use axum::{extract::State, Json};
use schemars::JsonSchema;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    book::Book,
    error::{ApiError, ApiErrorMessage, ErrorVerbosityProvider},
    extractor::query::ApiQuery,
    state::ApiState,
};

#[derive(Debug, Deserialize, JsonSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListBooksQuery {
    /// Number of leading books to return. Larger than the store means all of them.
    pub num_books_to_return: Option<i64>,
}

/// Lists the books in insertion order.
///
/// An empty store is filled with 10 dummy books first.
#[utoipa::path(
    get,
    path = "/",
    tag = "books",
    params(ListBooksQuery),
    responses(
        (status = 200, description = "Books in insertion order", body = [Book]),
        (status = 418, description = "Negative number of books requested", body = ApiErrorMessage),
    )
)]
pub async fn list_books(
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<ListBooksQuery>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state
        .store()
        .list(query.num_books_to_return)
        .await
        .map_err(|err| ApiError::from_store_error(state.error_verbosity(), err))?;

    Ok(Json(books))
}

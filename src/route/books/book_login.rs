use axum::{extract::State, Json};
use schemars::JsonSchema;
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    book::Book,
    error::ApiErrorMessage,
    extractor::{credentials::ApiAuthenticatedCredentials, query::ApiQuery},
    state::ApiState,
};

#[derive(Debug, Deserialize, JsonSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookLoginQuery {
    /// Book id
    pub id: Option<Uuid>,
}

/// Finds a book by id for callers sending the right `username` and `password` headers.
#[utoipa::path(
    get,
    path = "/book-login",
    tag = "books",
    params(
        BookLoginQuery,
        ("username" = Option<String>, Header, description = "Username"),
        ("password" = Option<String>, Header, description = "Password"),
    ),
    responses(
        (status = 200, description = "The book, or `null` if it does not exist", body = Book),
        (status = 401, description = "Either username or password is incorrect", body = ApiErrorMessage),
    )
)]
pub async fn book_login(
    ApiAuthenticatedCredentials(credentials): ApiAuthenticatedCredentials,
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<BookLoginQuery>,
) -> Json<Option<Book>> {
    tracing::debug!(username = ?credentials.username, "Book login");

    let book = match query.id {
        Some(id) => state.store().get(id).await,
        None => None,
    };

    Json(book)
}

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiErrorMessage, ErrorVerbosityProvider},
    extractor::path::ApiPath,
    state::ApiState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteBookResponse {
    #[schema(example = "Book deleted successfully")]
    pub message: String,
}

impl IntoResponse for DeleteBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = Uuid, Path, description = "Id of the book to delete")),
    responses(
        (status = 200, description = "Book deleted", body = DeleteBookResponse),
        (status = 404, description = "Book not found", body = ApiErrorMessage),
    )
)]
pub async fn delete_book(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<DeleteBookResponse, ApiError> {
    state
        .store()
        .delete(id)
        .await
        .map_err(|err| ApiError::from_store_error(state.error_verbosity(), err))?;

    Ok(DeleteBookResponse {
        message: "Book deleted successfully".to_string(),
    })
}

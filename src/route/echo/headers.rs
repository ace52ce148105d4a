use axum::{
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const OPTIONAL_HEADER: &str = "optional-header";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HeadersResponse {
    pub optional_header: Option<String>,
}

impl IntoResponse for HeadersResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Echoes the `optional-header` header, `null` when absent or not valid UTF-8.
#[utoipa::path(
    post,
    path = "/headers",
    tag = "echo",
    params(("optional-header" = Option<String>, Header, description = "Any value")),
    responses(
        (status = 200, description = "The received header value", body = HeadersResponse),
    )
)]
pub async fn headers(headers: HeaderMap) -> HeadersResponse {
    let optional_header = headers
        .get(OPTIONAL_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    HeadersResponse { optional_header }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use derivative::Derivative;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::extractor::form::ApiForm;

#[derive(Derivative, Deserialize, JsonSchema, ToSchema)]
#[derivative(Debug)]
pub struct LoginForm {
    pub username: String,
    #[derivative(Debug(format_with = "crate::utils::mask_fmt"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub username: String,
    pub password: String,
}

impl IntoResponse for LoginResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Echoes the submitted form. Nothing is authenticated.
#[utoipa::path(
    post,
    path = "/login",
    tag = "echo",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "The submitted credentials", body = LoginResponse),
        (status = 400, description = "Missing form fields"),
    )
)]
pub async fn login(ApiForm(form): ApiForm<LoginForm>) -> LoginResponse {
    LoginResponse {
        username: form.username,
        password: form.password,
    }
}

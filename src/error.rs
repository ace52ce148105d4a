use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use derive_more::From;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::store::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ErrorVerbosity {
    /// Server returns an empty response with [`StatusCode::NO_CONTENT`] for all errors.
    None,
    /// Server returns only the appropriate status code.
    StatusCode,
    /// Server returns only the message with the appropriate status code.
    Message,
    /// Server returns the message, the error type with cleared error content and the appropriate status code.
    Type,
    /// Server returns the message, the error type with the error content and the appropriate status code.
    Full,
}

impl ErrorVerbosity {
    pub fn should_generate_error_reason(&self) -> bool {
        matches!(self, ErrorVerbosity::Full)
    }
}

pub trait ErrorVerbosityProvider {
    fn error_verbosity(&self) -> ErrorVerbosity;
}

#[derive(Debug, Serialize)]
struct ApiErrorResponse {
    #[serde(flatten)]
    error: ApiError,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'static str>,
}

/// The body returned with [`ErrorVerbosity::Message`].
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorMessage {
    /// Human readable error message.
    #[schema(example = "Got negative number: -1")]
    pub message: String,
    /// Fixed detail for errors raised by the book routes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Book not found")]
    pub detail: Option<String>,
}

impl From<ApiErrorResponse> for ApiErrorMessage {
    fn from(response: ApiErrorResponse) -> Self {
        ApiErrorMessage {
            message: response.message,
            detail: response.detail.map(str::to_string),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let status_code = self.error.status_code();

        match self.error.verbosity() {
            ErrorVerbosity::None => StatusCode::NO_CONTENT.into_response(),
            ErrorVerbosity::StatusCode => status_code.into_response(),
            ErrorVerbosity::Message => {
                (status_code, Json(ApiErrorMessage::from(self))).into_response()
            }
            ErrorVerbosity::Type | ErrorVerbosity::Full => {
                (status_code, Json(self)).into_response()
            }
        }
    }
}

#[derive(Debug, From, Serialize)]
#[serde(tag = "error_type", content = "error")]
/// API error
pub enum ApiError {
    /// Internal server error
    ///
    /// This error is returned when an internal server error occurs.
    InternalServerError(InternalServerError),
    /// Query error
    ///
    /// This error is returned when the query parameters are not as expected.
    Query(QueryError),
    /// Body error
    ///
    /// This error is returned when the JSON or form body is not as expected.
    Body(BodyError),
    /// Path error
    ///
    /// This error is returned when the path is not as expected.
    Path(PathError),
    /// Validation error
    ///
    /// This error is returned when a well formed payload violates a field constraint.
    Validation(ValidationError),
    /// Negative count error
    ///
    /// This error is returned when a negative number of books is requested.
    NegativeCount(NegativeCountError),
    /// Book not found error
    ///
    /// This error is returned when the book to update or delete does not exist.
    BookNotFound(BookNotFoundError),
    /// Unauthorized error
    ///
    /// This error is returned when the credentials headers do not match.
    Unauthorized(UnauthorizedError),
    /// Method not allowed
    ///
    /// This error is returned when the method is not allowed.
    MethodNotAllowed(MethodNotAllowedError),
    /// Not found error
    ///
    /// This error is returned when the requested route does not exist.
    NotFound(NotFoundError),
}

impl ApiError {
    /// Maps a store failure to the matching API error.
    pub fn from_store_error(verbosity: ErrorVerbosity, err: StoreError) -> Self {
        match err {
            StoreError::NegativeCount(number) => NegativeCountError::new(verbosity, number).into(),
            StoreError::NotFound(_) => BookNotFoundError::new(verbosity).into(),
        }
    }

    fn verbosity(&self) -> ErrorVerbosity {
        match self {
            ApiError::InternalServerError(err) => err.verbosity,
            ApiError::Query(err) => err.verbosity,
            ApiError::Body(err) => err.verbosity,
            ApiError::Path(err) => err.verbosity,
            ApiError::Validation(err) => err.verbosity,
            ApiError::NegativeCount(err) => err.verbosity,
            ApiError::BookNotFound(err) => err.verbosity,
            ApiError::Unauthorized(err) => err.verbosity,
            ApiError::MethodNotAllowed(err) => err.verbosity,
            ApiError::NotFound(err) => err.verbosity,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::InternalServerError(_) => "An internal server error has occurred".into(),
            ApiError::Query(_) => "Failed to parse query parameters".into(),
            ApiError::Body(_) => "Failed to parse request body".into(),
            ApiError::Path(_) => "Failed to parse path parameters".into(),
            ApiError::Validation(err) => {
                format!("Invalid fields: {}", err.invalid_fields.join(", "))
            }
            ApiError::NegativeCount(err) => format!("Got negative number: {}", err.number),
            ApiError::BookNotFound(_) => "The requested book was not found".into(),
            ApiError::Unauthorized(_) => "Unauthorized".into(),
            ApiError::MethodNotAllowed(_) => "Method not allowed".into(),
            ApiError::NotFound(_) => "The requested resource was not found".into(),
        }
    }

    fn detail(&self) -> Option<&'static str> {
        match self {
            ApiError::BookNotFound(_) => Some("Book not found"),
            ApiError::Unauthorized(_) => Some("Either username or password is incorrect."),
            _ => None,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Query(_) | ApiError::Body(_) | ApiError::Path(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NegativeCount(_) => StatusCode::IM_A_TEAPOT,
            ApiError::BookNotFound(_) | ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<ApiError> for ApiErrorResponse {
    fn from(error: ApiError) -> Self {
        let (message, detail) = match error.verbosity() {
            ErrorVerbosity::None => (String::new(), None),
            _ => (error.message(), error.detail()),
        };

        ApiErrorResponse {
            error,
            message,
            detail,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        ApiErrorResponse::from(self).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct InternalServerError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    internal_server_error: Option<String>,
}

impl InternalServerError {
    pub fn from_generic_error<E: Into<anyhow::Error>>(verbosity: ErrorVerbosity, err: E) -> Self {
        let err: anyhow::Error = err.into();
        let err = format!("{err:#}");
        tracing::error!(%err, "Internal server error");

        let internal_server_error = verbosity.should_generate_error_reason().then_some(err);

        InternalServerError {
            verbosity,
            internal_server_error,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QueryError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    query_error_reason: Option<String>,
    query_expected_schema: Option<String>,
}

impl QueryError {
    pub fn new(
        verbosity: ErrorVerbosity,
        query_error_reason: String,
        query_expected_schema: String,
    ) -> Self {
        let (query_error_reason, query_expected_schema) =
            match verbosity.should_generate_error_reason() {
                true => (Some(query_error_reason), Some(query_expected_schema)),
                false => (None, None),
            };

        QueryError {
            verbosity,
            query_error_reason,
            query_expected_schema,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BodyError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    body_error_reason: Option<String>,
    body_expected_schema: Option<String>,
}

impl BodyError {
    pub fn new(
        verbosity: ErrorVerbosity,
        body_error_reason: String,
        body_expected_schema: String,
    ) -> Self {
        let (body_error_reason, body_expected_schema) =
            match verbosity.should_generate_error_reason() {
                true => (Some(body_error_reason), Some(body_expected_schema)),
                false => (None, None),
            };

        BodyError {
            verbosity,
            body_error_reason,
            body_expected_schema,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PathError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    path_error_reason: Option<String>,
}

impl PathError {
    pub fn from_path_rejection(verbosity: ErrorVerbosity, rejection: PathRejection) -> Self {
        let path_error_reason = verbosity
            .should_generate_error_reason()
            .then(|| rejection.body_text());

        PathError {
            verbosity,
            path_error_reason,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ValidationError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    #[serde(skip)]
    invalid_fields: Vec<String>,
    validation_errors: Option<ValidationErrors>,
}

impl ValidationError {
    pub fn from_validation_errors(verbosity: ErrorVerbosity, errors: ValidationErrors) -> Self {
        let mut invalid_fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        invalid_fields.sort();

        let validation_errors = verbosity.should_generate_error_reason().then_some(errors);

        ValidationError {
            verbosity,
            invalid_fields,
            validation_errors,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NegativeCountError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    #[serde(skip)]
    number: i64,
    negative_number: Option<i64>,
}

impl NegativeCountError {
    pub fn new(verbosity: ErrorVerbosity, number: i64) -> Self {
        let negative_number = verbosity.should_generate_error_reason().then_some(number);

        NegativeCountError {
            verbosity,
            number,
            negative_number,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookNotFoundError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
}

impl BookNotFoundError {
    pub fn new(verbosity: ErrorVerbosity) -> Self {
        BookNotFoundError { verbosity }
    }
}

#[derive(Debug, Serialize)]
pub struct UnauthorizedError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
}

impl UnauthorizedError {
    pub fn new(verbosity: ErrorVerbosity) -> Self {
        UnauthorizedError { verbosity }
    }
}

#[derive(Debug, Serialize)]
pub struct MethodNotAllowedError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
}

impl MethodNotAllowedError {
    pub fn new(verbosity: ErrorVerbosity) -> Self {
        MethodNotAllowedError { verbosity }
    }
}

#[derive(Debug, Serialize)]
pub struct NotFoundError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
}

impl NotFoundError {
    pub fn new(verbosity: ErrorVerbosity) -> Self {
        NotFoundError { verbosity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        use http_body_util::BodyExt;

        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Body is not readable")
            .to_bytes();

        serde_json::from_slice(&bytes).expect("Body is not JSON")
    }

    #[tokio::test]
    async fn negative_count_message_embeds_the_number() {
        let response = ApiError::from_store_error(ErrorVerbosity::Message, StoreError::NegativeCount(-3))
            .into_response();

        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "Got negative number: -3" })
        );
    }

    #[tokio::test]
    async fn full_verbosity_carries_type_and_content() {
        let response = ApiError::from_store_error(ErrorVerbosity::Full, StoreError::NegativeCount(-1))
            .into_response();

        let body = body_json(response).await;
        assert_eq!(body["error_type"], "NegativeCount");
        assert_eq!(body["error"]["negative_number"], -1);
    }

    #[tokio::test]
    async fn type_verbosity_clears_content() {
        let response = ApiError::from_store_error(ErrorVerbosity::Type, StoreError::NegativeCount(-1))
            .into_response();

        let body = body_json(response).await;
        assert_eq!(body["error_type"], "NegativeCount");
        assert!(body["error"]["negative_number"].is_null());
    }

    #[tokio::test]
    async fn book_not_found_has_fixed_detail() {
        let response =
            ApiError::from_store_error(ErrorVerbosity::Message, StoreError::NotFound(uuid::Uuid::nil()))
                .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["detail"], "Book not found");
    }

    #[tokio::test]
    async fn status_code_verbosity_has_no_body() {
        let response = ApiError::from(UnauthorizedError::new(ErrorVerbosity::StatusCode)).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        use http_body_util::BodyExt;
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn none_verbosity_hides_everything() {
        let response = ApiError::from(NotFoundError::new(ErrorVerbosity::None)).into_response();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}

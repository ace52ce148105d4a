use axum::Router;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    book::{Book, BookNoRating},
    error::ApiErrorMessage,
    route::{books, echo},
    state::ApiState,
};

pub const OPENAPI_JSON: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Bookstore", description = "In-memory bookstore API"),
    paths(
        books::list_books::list_books,
        books::create_book::create_book,
        books::get_book::get_book,
        books::get_book_no_rating::get_book_no_rating,
        books::update_book::update_book,
        books::delete_book::delete_book,
        books::book_login::book_login,
        echo::login::login,
        echo::headers::headers,
    ),
    components(schemas(
        Book,
        BookNoRating,
        ApiErrorMessage,
        books::delete_book::DeleteBookResponse,
        echo::login::LoginForm,
        echo::login::LoginResponse,
        echo::headers::HeadersResponse,
    )),
    tags(
        (name = "books", description = "Book store"),
        (name = "echo", description = "Form and header echoes"),
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI document along with Swagger UI, ReDoc and RapiDoc.
pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new()
        .merge(SwaggerUi::new("/docs").url(OPENAPI_JSON, ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(RapiDoc::new(OPENAPI_JSON).path("/rapidoc"))
}

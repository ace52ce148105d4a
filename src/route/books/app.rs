use axum::{routing::get, Router};

use crate::state::ApiState;

pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new()
        .route(
            "/",
            get(super::list_books::list_books).post(super::create_book::create_book),
        )
        .route("/book-login", get(super::book_login::book_login))
        .route(
            "/books/:id",
            get(super::get_book::get_book)
                .put(super::update_book::update_book)
                .delete(super::delete_book::delete_book),
        )
        .route(
            "/books/no-rating/:id",
            get(super::get_book_no_rating::get_book_no_rating),
        )
}

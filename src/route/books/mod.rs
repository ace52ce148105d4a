pub mod app;
pub mod book_login;
pub mod create_book;
pub mod delete_book;
pub mod get_book;
pub mod get_book_no_rating;
pub mod list_books;
pub mod update_book;

pub mod books;
pub mod docs;
pub mod echo;

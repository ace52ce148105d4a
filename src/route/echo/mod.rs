pub mod app;
pub mod headers;
pub mod login;

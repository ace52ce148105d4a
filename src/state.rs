use std::{ops::Deref, sync::Arc};

use crate::{
    error::{ErrorVerbosity, ErrorVerbosityProvider},
    server::Credentials,
    store::BookStore,
    traits::CredentialsProvider,
};

#[derive(Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    pub fn new(error_verbosity: ErrorVerbosity, book_login: Credentials) -> Self {
        Self {
            inner: Arc::new(ApiStateInner {
                error_verbosity,
                book_login,
                store: BookStore::new(),
            }),
        }
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct ApiStateInner {
    error_verbosity: ErrorVerbosity,
    book_login: Credentials,
    store: BookStore,
}

impl ApiStateInner {
    pub fn store(&self) -> &BookStore {
        &self.store
    }
}

impl ErrorVerbosityProvider for ApiState {
    fn error_verbosity(&self) -> ErrorVerbosity {
        self.error_verbosity
    }
}

impl CredentialsProvider for ApiState {
    fn authenticate(&self, username: Option<&str>, password: Option<&str>) -> bool {
        username == Some(self.book_login.username.as_str())
            && password == Some(self.book_login.password.as_str())
    }
}

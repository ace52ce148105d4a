use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};

use crate::{
    error::{ApiError, ErrorVerbosityProvider, UnauthorizedError},
    traits::CredentialsProvider,
    types::used_credentials::UsedCredentials,
};

pub const USERNAME_HEADER: &str = "username";
pub const PASSWORD_HEADER: &str = "password";

/// Extracts the `username` and `password` headers and checks them against the state.
///
/// Missing headers or headers with invalid characters are treated as a mismatch.
#[derive(Debug, Clone)]
pub struct ApiAuthenticatedCredentials(pub UsedCredentials);

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let value = headers.get(name)?;

    match value.to_str() {
        Ok(value) => Some(value.to_string()),
        Err(err) => {
            tracing::warn!(%err, header = name, "Header contains invalid characters");

            None
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ApiAuthenticatedCredentials
where
    S: Send + Sync + CredentialsProvider + ErrorVerbosityProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "credentials_authenticator", skip_all)]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let used_credentials = UsedCredentials {
            username: header_value(&parts.headers, USERNAME_HEADER),
            password: header_value(&parts.headers, PASSWORD_HEADER),
        };

        if !state.authenticate(
            used_credentials.username.as_deref(),
            used_credentials.password.as_deref(),
        ) {
            tracing::warn!(?used_credentials, "Rejection. Invalid credentials");

            return Err(UnauthorizedError::new(state.error_verbosity()).into());
        }

        tracing::trace!(?used_credentials, "Authenticated");

        Ok(ApiAuthenticatedCredentials(used_credentials))
    }
}

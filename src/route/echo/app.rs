use axum::{routing::post, Router};

use crate::state::ApiState;

pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new()
        .route("/login", post(super::login::login))
        .route("/headers", post(super::headers::headers))
}

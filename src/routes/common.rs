//! Common routes: health, readiness, version, OpenAPI.

use crate::handlers::common::{health, openapi, ready, version};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/openapi", get(openapi))
        .with_state(state)
}

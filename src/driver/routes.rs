use axum::{routing::get, Router};

use super::handlers;
use super::AppState;

/// Create the router. Every route is GET-only; other methods get 405.
///
/// `get` also answers HEAD, so the API routes reject it explicitly.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/address",
            get(handlers::lookup_address).head(handlers::method_not_allowed),
        )
        .route(
            "/address/access_logs",
            get(handlers::access_logs).head(handlers::method_not_allowed),
        )
        .with_state(state)
}

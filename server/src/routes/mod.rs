use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, with_security_headers, Config};
use crate::handlers::{create_user, health_check, hello, list_users};
use crate::state::AppState;

/// The `/api` routes without any middleware.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello))
        .route("/users", get(list_users).post(create_user))
        .route("/health", get(health_check))
}

pub fn create_routes(state: AppState, config: &Config) -> Router {
    let router = Router::new().nest("/api", api_routes());

    with_security_headers(router, config.production)
        .layer(create_cors_layer(config.cors_allowed_origins.as_deref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

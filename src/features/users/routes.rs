use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// Public user routes (no authentication required)
pub fn public_routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/api/register", post(handlers::register))
        .with_state(service)
}

/// Protected profile routes (require JWT authentication)
///
/// `/api/users/me` is a thin alias of `/api/profile`; both resolve to the
/// same handlers.
pub fn protected_routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route(
            "/api/profile",
            get(handlers::get_profile)
                .put(handlers::update_profile)
                .patch(handlers::update_profile),
        )
        .route(
            "/api/users/me",
            get(handlers::get_profile)
                .put(handlers::update_profile)
                .patch(handlers::update_profile),
        )
        .with_state(service)
}

#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
pub fn create_staff_user() -> AuthenticatedUser {
    AuthenticatedUser {
        user_id: Uuid::new_v4(),
        username: "test_staff".to_string(),
        is_staff: true,
    }
}

#[cfg(test)]
pub fn create_regular_user() -> AuthenticatedUser {
    AuthenticatedUser {
        user_id: Uuid::new_v4(),
        username: "test_user".to_string(),
        is_staff: false,
    }
}

#[cfg(test)]
async fn inject_staff_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_staff_user());
    next.run(request).await
}

#[cfg(test)]
async fn inject_regular_user_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_regular_user());
    next.run(request).await
}

#[cfg(test)]
pub fn with_staff_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_staff_middleware))
}

#[cfg(test)]
pub fn with_regular_user_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_regular_user_middleware))
}

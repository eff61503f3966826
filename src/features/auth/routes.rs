use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;
use axum::{routing::post, Router};
use std::sync::Arc;

/// Public auth routes (no authentication required)
pub fn routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/token", post(handlers::obtain_token))
        .route("/api/token/refresh", post(handlers::refresh_token))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AuthConfig;
    use crate::features::auth::services::TokenService;
    use crate::features::users::models::User;
    use axum_test::TestServer;
    use chrono::Utc;
    use serde_json::json;
    use sqlx::PgPool;
    use std::time::Duration;
    use uuid::Uuid;

    fn test_token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new(&AuthConfig {
            jwt_secret: "routes-test-secret-0123456789-0123456789".to_string(),
            access_token_ttl: Duration::from_secs(900),
            refresh_token_ttl: Duration::from_secs(3600),
            jwt_leeway: Duration::from_secs(0),
        }))
    }

    fn test_server(token_service: Arc<TokenService>) -> TestServer {
        // Lazy pool: never connects as long as refresh does not touch the database
        let pool = PgPool::connect_lazy("postgres://localhost/storefront_test").unwrap();
        let service = Arc::new(AuthService::new(pool, token_service));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_refresh_returns_new_access_token() {
        let token_service = test_token_service();
        let user = User {
            id: Uuid::new_v4(),
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
            phone_number: "".to_string(),
            address: "".to_string(),
            is_staff: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let pair = token_service.issue_pair(&user).unwrap();

        let server = test_server(Arc::clone(&token_service));
        let response = server
            .post("/api/token/refresh")
            .json(&json!({ "refresh": pair.refresh }))
            .await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);

        let access = body["data"]["access"].as_str().unwrap();
        let authenticated = token_service.validate_access_token(access).unwrap();
        assert_eq!(authenticated.username, "bob");
    }

    #[tokio::test]
    async fn test_refresh_with_garbage_token_is_unauthorized() {
        let server = test_server(test_token_service());
        let response = server
            .post("/api/token/refresh")
            .json(&json!({ "refresh": "not-a-jwt" }))
            .await;

        response.assert_status_unauthorized();
    }
}

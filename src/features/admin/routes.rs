use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::admin::handlers;
use crate::features::admin::services::AdminService;

/// Create operator console routes (all require staff access)
pub fn routes(admin_service: Arc<AdminService>) -> Router {
    Router::new()
        .route("/resources", get(handlers::list_admin_resources))
        .route("/categories", get(handlers::list_admin_categories))
        .route("/products", get(handlers::list_admin_products))
        .route("/product-images", get(handlers::list_admin_product_images))
        .route("/users", get(handlers::list_admin_users))
        .with_state(admin_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{with_regular_user_auth, with_staff_auth};
    use axum_test::TestServer;
    use sqlx::PgPool;

    fn test_routes() -> Router {
        // Lazy pool: the registry endpoint never touches the database
        let pool = PgPool::connect_lazy("postgres://localhost/storefront_test").unwrap();
        routes(Arc::new(AdminService::new(pool)))
    }

    #[tokio::test]
    async fn test_registry_endpoint_returns_entities_for_staff() {
        let server = TestServer::new(with_staff_auth(test_routes())).unwrap();
        let response = server.get("/resources").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);

        let entities: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["entity"].as_str().unwrap())
            .collect();
        assert_eq!(
            entities,
            vec!["categories", "products", "product-images", "users"]
        );
    }

    #[tokio::test]
    async fn test_registry_endpoint_forbidden_for_non_staff() {
        let server = TestServer::new(with_regular_user_auth(test_routes())).unwrap();
        let response = server.get("/resources").await;

        response.assert_status_forbidden();
    }

    #[tokio::test]
    async fn test_registry_endpoint_unauthorized_without_user() {
        let server = TestServer::new(test_routes()).unwrap();
        let response = server.get("/resources").await;

        response.assert_status_unauthorized();
    }
}

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::products::handlers;
use crate::features::products::services::{ProductImageService, ProductService};

/// Public product routes (JSON CRUD surface)
pub fn routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route(
            "/api/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/api/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .patch(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .with_state(service)
}

/// Protected image upload routes (require JWT authentication)
pub fn image_routes(service: Arc<ProductImageService>) -> Router {
    Router::new()
        .route(
            "/api/products/{id}/image",
            post(handlers::upload_primary_image),
        )
        .route(
            "/api/products/{id}/images",
            post(handlers::upload_gallery_image),
        )
        .route(
            "/api/products/{id}/images/{image_id}",
            axum::routing::delete(handlers::delete_gallery_image),
        )
        .with_state(service)
}

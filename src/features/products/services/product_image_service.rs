use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::{ProductImageResponseDto, ProductResponseDto};
use crate::features::products::models::ProductImage;
use crate::features::products::services::ProductService;
use crate::modules::storage::MediaStore;

/// Service for product image uploads
///
/// Handles both the primary image slot on the product row and the
/// one-to-many gallery attachments.
pub struct ProductImageService {
    pool: PgPool,
    media_store: Arc<MediaStore>,
    product_service: Arc<ProductService>,
}

impl ProductImageService {
    pub fn new(
        pool: PgPool,
        media_store: Arc<MediaStore>,
        product_service: Arc<ProductService>,
    ) -> Self {
        Self {
            pool,
            media_store,
            product_service,
        }
    }

    /// Upload and set the product's primary image, replacing any previous one
    pub async fn upload_primary_image(
        &self,
        product_id: Uuid,
        data: Vec<u8>,
        content_type: &str,
        original_filename: &str,
    ) -> Result<ProductResponseDto> {
        // Fails with NotFound before any file is written
        self.product_service.fetch_with_category(product_id).await?;

        let key =
            self.media_store
                .generate_product_image_key(product_id, content_type, original_filename);
        self.media_store.save(&key, &data).await?;

        let previous = self
            .product_service
            .set_primary_image(product_id, &key)
            .await?;

        if let Some(old_key) = previous {
            if let Err(e) = self.media_store.delete(&old_key).await {
                tracing::warn!("Failed to remove replaced image '{}': {}", old_key, e);
            }
        }

        tracing::info!("Primary image set for product {}: {}", product_id, key);

        self.product_service.get(product_id).await
    }

    /// Attach a gallery image to a product
    pub async fn add_gallery_image(
        &self,
        product_id: Uuid,
        data: Vec<u8>,
        content_type: &str,
        original_filename: &str,
    ) -> Result<ProductImageResponseDto> {
        self.product_service.fetch_with_category(product_id).await?;

        let key =
            self.media_store
                .generate_product_image_key(product_id, content_type, original_filename);
        self.media_store.save(&key, &data).await?;

        let image = sqlx::query_as::<_, ProductImage>(
            r#"
            INSERT INTO product_images (product_id, image)
            VALUES ($1, $2)
            RETURNING id, product_id, image, created_at
            "#,
        )
        .bind(product_id)
        .bind(&key)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert product image: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Gallery image added to product {}: {}", product_id, key);

        Ok(ProductImageResponseDto::from_model(image, &self.media_store))
    }

    /// Remove a gallery image from a product
    pub async fn delete_gallery_image(&self, product_id: Uuid, image_id: Uuid) -> Result<()> {
        let image = sqlx::query_as::<_, ProductImage>(
            r#"
            DELETE FROM product_images
            WHERE id = $1 AND product_id = $2
            RETURNING id, product_id, image, created_at
            "#,
        )
        .bind(image_id)
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete product image: {:?}", e);
            AppError::Database(e)
        })?;

        let image = image.ok_or_else(|| {
            AppError::NotFound(format!(
                "Image '{}' not found for product '{}'",
                image_id, product_id
            ))
        })?;

        if let Err(e) = self.media_store.delete(&image.image).await {
            tracing::warn!("Failed to remove media file '{}': {}", image.image, e);
        }

        tracing::info!(
            "Gallery image removed from product {}: {}",
            product_id,
            image.image
        );

        Ok(())
    }
}

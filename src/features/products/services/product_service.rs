use std::collections::HashMap;
use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::{
    CreateProductDto, ListProductsQuery, ProductResponseDto, UpdateProductDto,
};
use crate::features::products::models::{ProductImage, ProductWithCategory};
use crate::modules::storage::MediaStore;

const PRODUCT_COLUMNS: &str = "p.id, p.category_id, c.name AS category_name, p.name, \
     p.description, p.price, p.stock, p.image, p.is_active, p.created_at, p.updated_at";

/// Service for product operations
pub struct ProductService {
    pool: PgPool,
    media_store: Arc<MediaStore>,
}

impl ProductService {
    pub fn new(pool: PgPool, media_store: Arc<MediaStore>) -> Self {
        Self { pool, media_store }
    }

    /// List products, optionally filtered by category and active flag
    pub async fn list(&self, query: ListProductsQuery) -> Result<Vec<ProductResponseDto>> {
        let products = sqlx::query_as::<_, ProductWithCategory>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products p
            JOIN categories c ON c.id = p.category_id
            WHERE ($1::uuid IS NULL OR p.category_id = $1)
              AND ($2::bool IS NULL OR p.is_active = $2)
            ORDER BY p.created_at, p.id
            "#
        ))
        .bind(query.category)
        .bind(query.is_active)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list products: {:?}", e);
            AppError::Database(e)
        })?;

        let mut images_by_product = self
            .load_images(products.iter().map(|p| p.id).collect())
            .await?;

        Ok(products
            .into_iter()
            .map(|p| {
                let images = images_by_product.remove(&p.id).unwrap_or_default();
                ProductResponseDto::from_model(p, images, &self.media_store)
            })
            .collect())
    }

    /// Get product by id with its gallery images
    pub async fn get(&self, id: Uuid) -> Result<ProductResponseDto> {
        let product = self.fetch_with_category(id).await?;
        let images = self.fetch_gallery(id).await?;

        Ok(ProductResponseDto::from_model(
            product,
            images,
            &self.media_store,
        ))
    }

    /// Create a new product
    pub async fn create(&self, dto: CreateProductDto) -> Result<ProductResponseDto> {
        self.ensure_category_exists(dto.category).await?;

        let product = sqlx::query_as::<_, ProductWithCategory>(&format!(
            r#"
            WITH inserted AS (
                INSERT INTO products (category_id, name, description, price, stock, is_active)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING *
            )
            SELECT {PRODUCT_COLUMNS}
            FROM inserted p
            JOIN categories c ON c.id = p.category_id
            "#
        ))
        .bind(dto.category)
        .bind(&dto.name)
        .bind(dto.description.unwrap_or_default())
        .bind(dto.price)
        .bind(dto.stock)
        .bind(dto.is_active.unwrap_or(true))
        .fetch_one(&self.pool)
        .await
        .map_err(map_category_fk_violation)?;

        tracing::info!("Product created: id={}, name={}", product.id, product.name);

        Ok(ProductResponseDto::from_model(
            product,
            Vec::new(),
            &self.media_store,
        ))
    }

    /// Update a product (partial: only provided fields change)
    pub async fn update(&self, id: Uuid, dto: UpdateProductDto) -> Result<ProductResponseDto> {
        if let Some(category_id) = dto.category {
            self.ensure_category_exists(category_id).await?;
        }

        let product = sqlx::query_as::<_, ProductWithCategory>(&format!(
            r#"
            WITH updated AS (
                UPDATE products
                SET category_id = COALESCE($2, category_id),
                    name = COALESCE($3, name),
                    description = COALESCE($4, description),
                    price = COALESCE($5, price),
                    stock = COALESCE($6, stock),
                    is_active = COALESCE($7, is_active),
                    updated_at = NOW()
                WHERE id = $1
                RETURNING *
            )
            SELECT {PRODUCT_COLUMNS}
            FROM updated p
            JOIN categories c ON c.id = p.category_id
            "#
        ))
        .bind(id)
        .bind(dto.category)
        .bind(dto.name)
        .bind(dto.description)
        .bind(dto.price)
        .bind(dto.stock)
        .bind(dto.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_category_fk_violation)?;

        let product =
            product.ok_or_else(|| AppError::NotFound(format!("Product '{}' not found", id)))?;

        let images = self.fetch_gallery(id).await?;

        Ok(ProductResponseDto::from_model(
            product,
            images,
            &self.media_store,
        ))
    }

    /// Delete a product, its gallery rows (cascade) and stored media files
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let product = self.fetch_with_category(id).await?;
        let gallery = self.fetch_gallery(id).await?;

        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete product: {:?}", e);
                AppError::Database(e)
            })?;

        // Media cleanup is best-effort once the rows are gone
        let mut keys: Vec<String> = gallery.into_iter().map(|img| img.image).collect();
        if let Some(key) = product.image {
            keys.push(key);
        }
        for key in keys {
            if let Err(e) = self.media_store.delete(&key).await {
                tracing::warn!("Failed to remove media file '{}': {}", key, e);
            }
        }

        tracing::info!("Product deleted: id={}", id);

        Ok(())
    }

    /// Set or replace the primary image path of a product
    ///
    /// Returns the previous path so the caller can clean up the old file.
    pub(super) async fn set_primary_image(&self, id: Uuid, key: &str) -> Result<Option<String>> {
        let previous =
            sqlx::query_scalar::<_, Option<String>>("SELECT image FROM products WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::Database)?
                .ok_or_else(|| AppError::NotFound(format!("Product '{}' not found", id)))?;

        sqlx::query("UPDATE products SET image = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(previous)
    }

    pub(super) async fn fetch_with_category(&self, id: Uuid) -> Result<ProductWithCategory> {
        let product = sqlx::query_as::<_, ProductWithCategory>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products p
            JOIN categories c ON c.id = p.category_id
            WHERE p.id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get product: {:?}", e);
            AppError::Database(e)
        })?;

        product.ok_or_else(|| AppError::NotFound(format!("Product '{}' not found", id)))
    }

    pub(super) async fn fetch_gallery(&self, product_id: Uuid) -> Result<Vec<ProductImage>> {
        let images = sqlx::query_as::<_, ProductImage>(
            r#"
            SELECT id, product_id, image, created_at
            FROM product_images
            WHERE product_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(images)
    }

    async fn load_images(
        &self,
        product_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<ProductImage>>> {
        if product_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let images = sqlx::query_as::<_, ProductImage>(
            r#"
            SELECT id, product_id, image, created_at
            FROM product_images
            WHERE product_id = ANY($1)
            ORDER BY created_at, id
            "#,
        )
        .bind(&product_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let mut by_product: HashMap<Uuid, Vec<ProductImage>> = HashMap::new();
        for image in images {
            by_product.entry(image.product_id).or_default().push(image);
        }

        Ok(by_product)
    }

    async fn ensure_category_exists(&self, category_id: Uuid) -> Result<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)",
        )
        .bind(category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if !exists {
            return Err(AppError::Validation(format!(
                "Category '{}' does not exist",
                category_id
            )));
        }

        Ok(())
    }
}

/// Map foreign key violations on category_id (racing past the pre-check)
fn map_category_fk_violation(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code().as_deref() == Some("23503") {
            return AppError::Validation("Referenced category does not exist".to_string());
        }
    }

    tracing::error!("Failed to write product: {:?}", e);
    AppError::Database(e)
}

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::admin::dtos::{
    AdminCategoryDto, AdminProductDto, AdminProductImageDto, AdminUserDto,
};

#[derive(FromRow)]
struct CategoryRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    category_id: Uuid,
    category_name: String,
    price: rust_decimal::Decimal,
    stock: i32,
    is_active: bool,
    created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(FromRow)]
struct ProductImageRow {
    id: Uuid,
    product_id: Uuid,
    product_name: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    is_staff: bool,
    created_at: chrono::DateTime<chrono::Utc>,
}

/// Service for operator console queries
///
/// Search and filter predicates follow the static registry: free-text
/// search ILIKEs over the entity's registered search fields only.
pub struct AdminService {
    pool: PgPool,
}

impl AdminService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List categories with optional name search
    pub async fn list_categories(
        &self,
        offset: i64,
        limit: i64,
        q: Option<&str>,
    ) -> Result<(Vec<AdminCategoryDto>, i64)> {
        let pattern = search_pattern(q);

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM categories WHERE ($1::text IS NULL OR name ILIKE $1)",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, description, created_at
            FROM categories
            WHERE ($1::text IS NULL OR name ILIKE $1)
            ORDER BY created_at DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(&pattern)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories for console: {:?}", e);
            AppError::Database(e)
        })?;

        let items = rows
            .into_iter()
            .map(|r| AdminCategoryDto {
                id: r.id,
                name: r.name,
                description: r.description,
                created_at: r.created_at,
            })
            .collect();

        Ok((items, total))
    }

    /// List products with optional search and category/is_active filters
    pub async fn list_products(
        &self,
        offset: i64,
        limit: i64,
        q: Option<&str>,
        category: Option<Uuid>,
        is_active: Option<bool>,
    ) -> Result<(Vec<AdminProductDto>, i64)> {
        let pattern = search_pattern(q);

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM products
            WHERE ($1::text IS NULL OR name ILIKE $1 OR description ILIKE $1)
              AND ($2::uuid IS NULL OR category_id = $2)
              AND ($3::bool IS NULL OR is_active = $3)
            "#,
        )
        .bind(&pattern)
        .bind(category)
        .bind(is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT p.id, p.name, p.category_id, c.name AS category_name,
                   p.price, p.stock, p.is_active, p.created_at
            FROM products p
            JOIN categories c ON c.id = p.category_id
            WHERE ($1::text IS NULL OR p.name ILIKE $1 OR p.description ILIKE $1)
              AND ($2::uuid IS NULL OR p.category_id = $2)
              AND ($3::bool IS NULL OR p.is_active = $3)
            ORDER BY p.created_at DESC
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(&pattern)
        .bind(category)
        .bind(is_active)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list products for console: {:?}", e);
            AppError::Database(e)
        })?;

        let items = rows
            .into_iter()
            .map(|r| AdminProductDto {
                id: r.id,
                name: r.name,
                category: r.category_id,
                category_name: r.category_name,
                price: r.price,
                stock: r.stock,
                is_active: r.is_active,
                created_at: r.created_at,
            })
            .collect();

        Ok((items, total))
    }

    /// List product images with optional product filter
    pub async fn list_product_images(
        &self,
        offset: i64,
        limit: i64,
        product: Option<Uuid>,
    ) -> Result<(Vec<AdminProductImageDto>, i64)> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM product_images WHERE ($1::uuid IS NULL OR product_id = $1)",
        )
        .bind(product)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let rows = sqlx::query_as::<_, ProductImageRow>(
            r#"
            SELECT i.id, i.product_id, p.name AS product_name, i.created_at
            FROM product_images i
            JOIN products p ON p.id = i.product_id
            WHERE ($1::uuid IS NULL OR i.product_id = $1)
            ORDER BY i.created_at DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(product)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list product images for console: {:?}", e);
            AppError::Database(e)
        })?;

        let items = rows
            .into_iter()
            .map(|r| AdminProductImageDto {
                id: r.id,
                product: r.product_id,
                product_name: r.product_name,
                created_at: r.created_at,
            })
            .collect();

        Ok((items, total))
    }

    /// List users with optional username/email search
    pub async fn list_users(
        &self,
        offset: i64,
        limit: i64,
        q: Option<&str>,
    ) -> Result<(Vec<AdminUserDto>, i64)> {
        let pattern = search_pattern(q);

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE ($1::text IS NULL OR username ILIKE $1 OR email ILIKE $1)",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, is_staff, created_at
            FROM users
            WHERE ($1::text IS NULL OR username ILIKE $1 OR email ILIKE $1)
            ORDER BY created_at DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(&pattern)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list users for console: {:?}", e);
            AppError::Database(e)
        })?;

        let items = rows
            .into_iter()
            .map(|r| AdminUserDto {
                id: r.id,
                username: r.username,
                email: r.email,
                is_staff: r.is_staff,
                created_at: r.created_at,
            })
            .collect();

        Ok((items, total))
    }
}

/// Turn a raw search term into an ILIKE pattern, escaping wildcards
fn search_pattern(q: Option<&str>) -> Option<String> {
    let q = q?.trim();
    if q.is_empty() {
        return None;
    }

    let escaped = q.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
    Some(format!("%{}%", escaped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_pattern_wraps_and_escapes() {
        assert_eq!(search_pattern(Some("shirt")), Some("%shirt%".to_string()));
        assert_eq!(
            search_pattern(Some("50%_off")),
            Some("%50\\%\\_off%".to_string())
        );
    }

    #[test]
    fn test_search_pattern_empty_is_none() {
        assert_eq!(search_pattern(None), None);
        assert_eq!(search_pattern(Some("")), None);
        assert_eq!(search_pattern(Some("   ")), None);
    }
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::admin::registry::AdminResource;

/// One registry entry as served to the console
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminResourceDto {
    pub entity: String,
    pub list_display: Vec<String>,
    pub list_filter: Vec<String>,
    pub search_fields: Vec<String>,
}

impl From<&AdminResource> for AdminResourceDto {
    fn from(r: &AdminResource) -> Self {
        Self {
            entity: r.entity.to_string(),
            list_display: r.list_display.iter().map(|s| s.to_string()).collect(),
            list_filter: r.list_filter.iter().map(|s| s.to_string()).collect(),
            search_fields: r.search_fields.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Query params for searchable console lists
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct AdminListQuery {
    /// Free-text search over the entity's search fields
    pub q: Option<String>,
}

/// Query params for the products console list
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct AdminProductsQuery {
    /// Free-text search over name and description
    pub q: Option<String>,
    /// Filter by category id
    pub category: Option<Uuid>,
    /// Filter by active flag
    pub is_active: Option<bool>,
}

/// Query params for the product images console list
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct AdminProductImagesQuery {
    /// Filter by product id
    pub product: Option<Uuid>,
}

/// Console row for a category
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminCategoryDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Console row for a product
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminProductDto {
    pub id: Uuid,
    pub name: String,
    pub category: Uuid,
    pub category_name: String,
    pub price: Decimal,
    pub stock: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Console row for a product image
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminProductImageDto {
    pub id: Uuid,
    pub product: Uuid,
    pub product_name: String,
    pub created_at: DateTime<Utc>,
}

/// Console row for a user
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminUserDto {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

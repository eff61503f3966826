use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::products::models::{ProductImage, ProductWithCategory};
use crate::modules::storage::MediaStore;

/// Request DTO for creating a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductDto {
    /// Id of the category this product belongs to
    pub category: Uuid,

    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    /// Non-negative price
    #[validate(custom(function = validate_non_negative_price))]
    pub price: Decimal,

    /// Non-negative stock count
    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: i32,

    /// Defaults to true
    pub is_active: Option<bool>,
}

/// Request DTO for updating a product (partial: only provided fields change)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Uuid>,

    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[validate(custom(function = validate_non_negative_price))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,

    #[validate(range(min = 0, message = "Stock must not be negative"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Query params for listing products
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListProductsQuery {
    /// Only products in this category
    pub category: Option<Uuid>,
    /// Only products with this active flag
    pub is_active: Option<bool>,
}

/// Multipart form for image uploads (OpenAPI documentation)
#[derive(Debug, Deserialize, ToSchema)]
pub struct ImageUploadForm {
    /// Image file content
    #[schema(value_type = String, format = Binary)]
    pub image: String,
}

/// Response DTO for a gallery image
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductImageResponseDto {
    pub id: Uuid,
    /// Relative media path
    pub image: String,
    /// Absolute URL
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl ProductImageResponseDto {
    pub fn from_model(image: ProductImage, media_store: &MediaStore) -> Self {
        let image_url = media_store.file_url(&image.image);
        Self {
            id: image.id,
            image: image.image,
            image_url,
            created_at: image.created_at,
        }
    }
}

/// Response DTO for a product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponseDto {
    pub id: Uuid,
    /// Referenced category id
    pub category: Uuid,
    /// Current name of the referenced category
    pub category_name: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
    /// Relative media path of the primary image
    pub image: Option<String>,
    /// Absolute URL of the primary image
    pub image_url: Option<String>,
    /// Attached gallery images
    pub images: Vec<ProductImageResponseDto>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductResponseDto {
    pub fn from_model(
        product: ProductWithCategory,
        images: Vec<ProductImage>,
        media_store: &MediaStore,
    ) -> Self {
        let image_url = product.image.as_deref().map(|key| media_store.file_url(key));
        let images = images
            .into_iter()
            .map(|img| ProductImageResponseDto::from_model(img, media_store))
            .collect();

        Self {
            id: product.id,
            category: product.category_id,
            category_name: product.category_name,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            image: product.image,
            image_url,
            images,
            is_active: product.is_active,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

fn validate_non_negative_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        return Err(
            ValidationError::new("price_negative").with_message("Price must not be negative".into())
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn valid_product() -> CreateProductDto {
        CreateProductDto {
            category: Uuid::new_v4(),
            name: "Smartphone".to_string(),
            description: Some("Latest model smartphone with advanced features".to_string()),
            price: Decimal::from_str("699.99").unwrap(),
            stock: 50,
            is_active: None,
        }
    }

    #[test]
    fn test_valid_product_passes() {
        assert!(valid_product().validate().is_ok());
    }

    #[test]
    fn test_negative_price_fails() {
        let mut dto = valid_product();
        dto.price = Decimal::from_str("-1").unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_negative_stock_fails() {
        let mut dto = valid_product();
        dto.stock = -5;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_empty_name_fails() {
        let mut dto = valid_product();
        dto.name = "".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_price_round_trips_exactly() {
        let dto = valid_product();
        let json = serde_json::to_string(&dto).unwrap();
        let back: CreateProductDto = serde_json::from_str(&json).unwrap();
        assert_eq!(back.price, Decimal::from_str("699.99").unwrap());
        assert_eq!(back.stock, 50);
    }

    #[test]
    fn test_update_with_negative_price_fails() {
        let dto = UpdateProductDto {
            category: None,
            name: None,
            description: None,
            price: Some(Decimal::from_str("-0.01").unwrap()),
            stock: None,
            is_active: None,
        };
        assert!(dto.validate().is_err());
    }
}
